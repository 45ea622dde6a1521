//! 调整位置的算子。都需要完整物化上游，但物化推迟到首次拉取时进行。

use crate::pipe::Pipe;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use std::iter::FusedIterator;

enum DeferredState<T> {
    Pending(Box<dyn FnOnce() -> Vec<T>>),
    Ready(std::vec::IntoIter<T>),
}

/// 首次拉取时执行物化，之后从物化结果中逐个产出。
pub(crate) struct Deferred<T> {
    op: &'static str,
    state: DeferredState<T>,
}

impl<T> Deferred<T> {
    pub(crate) fn new(op: &'static str, materialize: impl FnOnce() -> Vec<T> + 'static) -> Deferred<T> {
        Deferred { op, state: DeferredState::Pending(Box::new(materialize)) }
    }
}

impl<T> Iterator for Deferred<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let DeferredState::Pending(_) = self.state {
            let pending = std::mem::replace(&mut self.state, DeferredState::Ready(Vec::new().into_iter()));
            if let DeferredState::Pending(materialize) = pending {
                let items = materialize();
                tracing::trace!(op = self.op, size = items.len(), "materialized upstream");
                self.state = DeferredState::Ready(items.into_iter());
            }
        }
        match &mut self.state {
            DeferredState::Ready(items) => items.next(),
            DeferredState::Pending(_) => None,
        }
    }
}

impl<T> FusedIterator for Deferred<T> {}

/// 排序与乱序：首次拉取时完整消费上游，不能用于无限序列。
impl<T: 'static> Pipe<T> {
    /// 按照`key`正序排序，稳定排序。
    pub fn sorted_by_key<K: Ord + 'static>(self, key: impl FnMut(&T) -> K + 'static) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("sorted_by_key", move || Itertools::sorted_by_key(self, key).collect()))
    }

    /// 按照`key`逆序排序，稳定排序。
    pub fn sorted_by_key_desc<K: Ord + 'static>(self, mut key: impl FnMut(&T) -> K + 'static) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("sorted_by_key_desc", move || {
            Itertools::sorted_by_key(self, |item| Reverse(key(item))).collect()
        }))
    }

    /// 按照浮点数`key`排序，NaN排在所有数值之后（逆序时排在最前）。
    pub fn sorted_by_float_key(self, mut key: impl FnMut(&T) -> f64 + 'static, desc: bool) -> Pipe<T> {
        if desc {
            self.sorted_by_key_desc(move |item| OrderedFloat(key(item)))
        } else {
            self.sorted_by_key(move |item| OrderedFloat(key(item)))
        }
    }

    /// 逆序产出。
    pub fn reversed(self) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("reversed", move || {
            let mut items: Vec<T> = Iterator::collect(self);
            items.reverse();
            items
        }))
    }

    /// 随机排序。
    pub fn shuffled(self) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("shuffled", move || {
            let mut items: Vec<T> = Iterator::collect(self);
            items.shuffle(&mut rand::rng());
            items
        }))
    }
}

impl<T: Ord + 'static> Pipe<T> {
    /// 正序排序。
    pub fn sorted(self) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("sorted", move || Itertools::sorted(self).collect()))
    }

    /// 逆序排序。
    pub fn sorted_desc(self) -> Pipe<T> {
        Pipe::op_wrap(Deferred::new("sorted_desc", move || Itertools::sorted_by(self, |a, b| b.cmp(a)).collect()))
    }
}
