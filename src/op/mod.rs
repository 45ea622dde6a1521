mod chunk;
mod set;
mod sort;
mod window;

use crate::Integer;
use crate::op::chunk::ChunkIter;
use crate::pipe::Pipe;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// 无缓冲算子：最多持有一个待定元素。
impl<T: 'static> Pipe<T> {
    /// 根据指定条件选择数据保留，其他数据丢弃。
    ///
    /// 每个上游元素最多调用一次条件，且按上游顺序调用。
    pub fn filter(self, pred: impl FnMut(&T) -> bool + 'static) -> Pipe<T> {
        self.op_filter(pred)
    }

    /// 转换每个元素。
    pub fn map<U: 'static>(self, f: impl FnMut(T) -> U + 'static) -> Pipe<U> {
        self.op_map(f)
    }

    /// 访问每个元素，不修改数据。
    pub fn inspect(self, f: impl FnMut(&T) + 'static) -> Pipe<T> {
        self.op_inspect(f)
    }

    /// 丢弃前N个数据，保留后续的其他数据。
    ///
    /// 被丢弃的数据仍然会从上游拉取。`n`为0时保留全部数据，为负数时无数据。
    pub fn skip(self, n: Integer) -> Pipe<T> {
        match n {
            0 => self,
            n if n < 0 => Pipe::empty(),
            n => Pipe::op_wrap(Iterator::skip(self, n as usize)),
        }
    }

    /// 保留前N个数据，丢弃后续的其他数据。
    ///
    /// 产出N个数据后不再拉取上游。`n`不为正数时无数据，且不会拉取上游。
    pub fn take(self, n: Integer) -> Pipe<T> {
        if n <= 0 { Pipe::empty() } else { Pipe::op_wrap(Iterator::take(self, n as usize)) }
    }

    /// 根据指定条件持续丢弃数据，直到条件首次不满足，之后的数据不再判断。
    pub fn skip_while(self, pred: impl FnMut(&T) -> bool + 'static) -> Pipe<T> {
        Pipe::op_wrap(Iterator::skip_while(self, pred))
    }

    /// 根据指定条件持续保留数据，直到条件首次不满足。
    pub fn take_while(self, pred: impl FnMut(&T) -> bool + 'static) -> Pipe<T> {
        Pipe::op_wrap(Iterator::take_while(self, pred))
    }

    /// 先产出当前流水线的全部数据，再产出`other`的全部数据。
    pub fn concat(self, other: impl Into<Pipe<T>>) -> Pipe<T> {
        Pipe::op_wrap(Iterator::chain(self, other.into()))
    }

    /// 将连续的数据按照指定大小分组，最后一组可能不足。`size`不为正数时无数据。
    pub fn chunks(self, size: Integer) -> Pipe<Vec<T>> {
        if size <= 0 { Pipe::empty() } else { Pipe::op_wrap(ChunkIter::new(self, size as usize)) }
    }

    /// 按照`key`去重，保留每个键首次出现的数据。
    ///
    /// 已出现的键会一直保留到流水线被丢弃。
    pub fn distinct_by<K>(self, mut key: impl FnMut(&T) -> K + 'static) -> Pipe<T>
    where
        K: Eq + Hash + 'static,
    {
        let mut seen = FxHashSet::default();
        self.op_filter(move |item| seen.insert(key(item)))
    }
}
