//! 尾部窗口算子：`skip_last`与`take_last`。
//!
//! 两者都基于固定容量的环形缓冲区，写游标按容量取模前进，内存严格受窗口大小约束。

use crate::Integer;
use crate::pipe::Pipe;
use std::iter::FusedIterator;
use std::mem;

/// 固定容量的环形缓冲区。
///
/// 填充阶段按需增长，填满后不再分配，新元素覆盖最旧的元素。
#[derive(Debug)]
pub(crate) struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    /// 填满后指向最旧的元素，也是下一次写入的位置。
    head: usize,
}

impl<T> RingBuffer<T> {
    pub(crate) fn new(capacity: usize) -> RingBuffer<T> {
        debug_assert!(capacity > 0);
        RingBuffer { slots: Vec::new(), capacity, head: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// 写入元素，如果缓冲区在写入前已满，返回被挤出的最旧元素。
    pub(crate) fn push(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            let evicted = mem::replace(&mut self.slots[self.head], item);
            self.head = (self.head + 1) % self.capacity;
            Some(evicted)
        } else {
            self.slots.push(item);
            None
        }
    }

    /// 按写入顺序（从旧到新）取出全部元素。
    pub(crate) fn into_ordered(mut self) -> Vec<T> {
        self.slots.rotate_left(self.head);
        self.slots
    }
}

/// 将上游延迟`window`个元素输出，末尾的`window`个元素被丢弃。
pub(crate) struct SkipLast<T> {
    upstream: Option<Pipe<T>>,
    window: usize,
    buffer: Option<RingBuffer<T>>,
}

impl<T> SkipLast<T> {
    pub(crate) fn new(upstream: Pipe<T>, window: usize) -> SkipLast<T> {
        SkipLast { upstream: Some(upstream), window, buffer: None }
    }
}

impl<T> Iterator for SkipLast<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let upstream = self.upstream.as_mut()?;
        let buffer = self.buffer.get_or_insert_with(|| RingBuffer::new(self.window));
        while let Some(item) = upstream.next() {
            if let Some(oldest) = buffer.push(item) {
                return Some(oldest);
            }
        }
        // 上游结束，窗口内剩余的元素永不产出
        self.upstream = None;
        self.buffer = None;
        None
    }
}

impl<T> FusedIterator for SkipLast<T> {}

enum TakeLastState<T> {
    Pending { upstream: Pipe<T>, window: usize },
    Draining(std::vec::IntoIter<T>),
}

/// 保留上游的最后`window`个元素。
///
/// 只有在上游结束后才能确定最后的元素，因此首次拉取时会完整消费上游，
/// 此算子不能用于无限序列。
pub(crate) struct TakeLast<T> {
    state: TakeLastState<T>,
}

impl<T> TakeLast<T> {
    pub(crate) fn new(upstream: Pipe<T>, window: usize) -> TakeLast<T> {
        TakeLast { state: TakeLastState::Pending { upstream, window } }
    }
}

impl<T> Iterator for TakeLast<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let TakeLastState::Pending { upstream, window } = &mut self.state {
            let mut buffer = RingBuffer::new(*window);
            let mut total = 0usize;
            for item in upstream {
                buffer.push(item);
                total += 1;
            }
            tracing::trace!(total, retained = buffer.len(), window = *window, "take_last drained upstream");
            self.state = TakeLastState::Draining(buffer.into_ordered().into_iter());
        }
        match &mut self.state {
            TakeLastState::Draining(retained) => retained.next(),
            TakeLastState::Pending { .. } => None,
        }
    }
}

impl<T> FusedIterator for TakeLast<T> {}

impl<T: 'static> Pipe<T> {
    /// 丢弃最后N个数据，保留之前的其他数据。
    ///
    /// 逐个拉取上游，窗口填满后每拉取一个元素就产出窗口中最旧的元素。
    /// `n`为0时保留全部数据，为负数时无数据；`n`不小于数据总量时无数据。
    pub fn skip_last(self, n: Integer) -> Pipe<T> {
        match n {
            0 => self,
            n if n < 0 => Pipe::empty(),
            n => Pipe::op_wrap(SkipLast::new(self, window_size(n))),
        }
    }

    /// 保留最后N个数据，按原始顺序产出。
    ///
    /// 首次拉取时完整消费上游，不能用于无限序列。`n`不为正数时无数据，且不会拉取上游。
    pub fn take_last(self, n: Integer) -> Pipe<T> {
        if n <= 0 { Pipe::empty() } else { Pipe::op_wrap(TakeLast::new(self, window_size(n))) }
    }
}

fn window_size(n: Integer) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
