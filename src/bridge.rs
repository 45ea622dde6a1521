//! 通道桥接：流水线与并发通道之间的双向适配。
//!
//! 这是唯一会越过单个同步调用栈的地方。后台生产线程没有显式的取消机制：
//! 如果接收端一直被持有却不再读取，生产线程会永久阻塞在发送上；
//! 丢弃全部接收端后，下一次发送失败，生产线程随即退出。调用方需要自行保证完全消费或及时丢弃接收端。

use crate::config::BridgeConfig;
use crate::err::{LzErr, LzRes};
use crate::pipe::Pipe;
use crossbeam_channel::{Receiver, Sender};
use std::thread::JoinHandle;

/// 后台生产者：持有接收端与生产线程句柄。
#[derive(Debug)]
pub struct Producer<T> {
    receiver: Receiver<T>,
    handle: JoinHandle<usize>,
}

impl<T: 'static> Producer<T> {
    pub fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }

    /// 将接收端作为流水线，生产线程被分离。
    pub fn into_pipe(self) -> Pipe<T> {
        Pipe::from_receiver(self.receiver)
    }

    /// 拆分为接收端与生产线程句柄，句柄的结果为已发送的元素数量。
    pub fn into_parts(self) -> (Receiver<T>, JoinHandle<usize>) {
        (self.receiver, self.handle)
    }
}

/// 在后台线程中构造流水线并将其完整拉取到通道中。
///
/// 流水线本身不要求`Send`，因此跨越线程边界的是构造函数。无论流水线正常结束还是发生panic，
/// 发送端都会随线程结束被丢弃，通道随之关闭。
pub fn produce<T, F>(config: &BridgeConfig, make_pipe: F) -> LzRes<Producer<T>>
where
    T: Send + 'static,
    F: FnOnce() -> Pipe<T> + Send + 'static,
{
    let (sender, receiver) = match config.capacity {
        Some(capacity) => crossbeam_channel::bounded(capacity),
        None => crossbeam_channel::unbounded(),
    };
    let thread = config.thread_name.clone();
    let handle = std::thread::Builder::new()
        .name(thread.clone())
        .spawn(move || {
            tracing::debug!("bridge producer started");
            let sent = make_pipe().pump_into(&sender);
            tracing::debug!(sent, "bridge producer finished");
            sent
        })
        .map_err(|err| LzErr::SpawnProducerErr { thread, err: err.to_string() })?;
    Ok(Producer { receiver, handle })
}

impl<T: 'static> Pipe<T> {
    /// 使用通道接收端作为输入，所有发送端被丢弃且通道为空时结束。不可重新遍历。
    pub fn from_receiver(receiver: Receiver<T>) -> Pipe<T> {
        Pipe::new(receiver.into_iter())
    }

    /// 在当前线程中将流水线拉取到通道中，返回已发送的元素数量。
    ///
    /// 接收端全部被丢弃时停止拉取。
    pub fn pump_into(self, sender: &Sender<T>) -> usize {
        let mut sent = 0;
        for item in self {
            if sender.send(item).is_err() {
                tracing::debug!(sent, "receiver disconnected, stop pulling");
                break;
            }
            sent += 1;
        }
        sent
    }
}
