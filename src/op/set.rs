//! 集合算子，要求元素支持相等与哈希。

use crate::pipe::Pipe;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::iter::FusedIterator;

/// 去重，记录已产出的每个元素。
pub(crate) struct Distinct<T> {
    upstream: Pipe<T>,
    seen: FxHashSet<T>,
}

impl<T> Iterator for Distinct<T>
where
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.upstream.by_ref() {
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
        None
    }
}

impl<T: Eq + Hash + Clone> FusedIterator for Distinct<T> {}

/// 查找集合：首次拉取时才完整消费第二个序列。
struct Lookup<T> {
    pending: Option<Pipe<T>>,
    set: FxHashSet<T>,
}

impl<T: Eq + Hash> Lookup<T> {
    fn new(second: Pipe<T>) -> Lookup<T> {
        Lookup { pending: Some(second), set: FxHashSet::default() }
    }

    fn load(&mut self, op: &'static str) -> &mut FxHashSet<T> {
        if let Some(second) = self.pending.take() {
            self.set.extend(second);
            tracing::trace!(op, size = self.set.len(), "drained second sequence into lookup set");
        }
        &mut self.set
    }
}

/// 差集：保留第一个序列中不在第二个序列中的元素，不对第一个序列自身去重。
pub(crate) struct Except<T> {
    first: Pipe<T>,
    lookup: Lookup<T>,
}

impl<T: Eq + Hash> Iterator for Except<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let lookup = self.lookup.load("except");
        self.first.by_ref().find(|item| !lookup.contains(item))
    }
}

impl<T: Eq + Hash> FusedIterator for Except<T> {}

/// 交集：第一个序列中出现在第二个序列中的每个不同元素只产出一次。
///
/// 元素产出后即从查找集合中移除，后续重复的元素不再命中。
pub(crate) struct Intersect<T> {
    first: Pipe<T>,
    lookup: Lookup<T>,
}

impl<T: Eq + Hash> Iterator for Intersect<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let lookup = self.lookup.load("intersect");
        if lookup.is_empty() {
            // 第二个序列为空，无需消费第一个序列
            return None;
        }
        self.first.by_ref().find(|item| lookup.remove(item))
    }
}

impl<T: Eq + Hash> FusedIterator for Intersect<T> {}

/// 集合算子：要求元素支持相等与哈希。
impl<T> Pipe<T>
where
    T: Eq + Hash + 'static,
{
    /// 去重，按首次出现的顺序产出每个不同的元素。
    ///
    /// 已产出的元素会一直保留到流水线被丢弃，内存随不同元素的数量增长，不适合高基数的无限序列。
    pub fn distinct(self) -> Pipe<T>
    where
        T: Clone,
    {
        Pipe::op_wrap(Distinct { upstream: self, seen: FxHashSet::default() })
    }

    /// 并集：先产出当前流水线中不同的元素，再产出`other`中新出现的不同元素。
    pub fn union(self, other: impl Into<Pipe<T>>) -> Pipe<T>
    where
        T: Clone,
    {
        self.concat(other).distinct()
    }

    /// 差集：产出不在`other`中的元素，保留当前流水线中重复元素的次数与顺序。
    ///
    /// 首次拉取时完整消费`other`，`other`不能是无限序列。
    pub fn except(self, other: impl Into<Pipe<T>>) -> Pipe<T> {
        Pipe::op_wrap(Except { first: self, lookup: Lookup::new(other.into()) })
    }

    /// 交集：按当前流水线的顺序，产出同时出现在`other`中的每个不同元素一次。
    ///
    /// 首次拉取时完整消费`other`，`other`不能是无限序列。
    pub fn intersect(self, other: impl Into<Pipe<T>>) -> Pipe<T> {
        Pipe::op_wrap(Intersect { first: self, lookup: Lookup::new(other.into()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted(values: Vec<i32>) -> (Pipe<i32>, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        (Pipe::of(values).inspect(move |_| counter.set(counter.get() + 1)), pulled)
    }

    #[test]
    fn test_distinct() {
        assert_eq!(Pipe::of(vec![3, 1, 3, 2, 1, 3]).distinct().to_vec(), vec![3, 1, 2]);
        assert_eq!(Pipe::<i32>::empty().distinct().count(), 0);
    }

    #[test]
    fn test_distinct_is_lazy() {
        let (pipe, pulled) = counted(vec![1, 1, 2, 3]);
        let mut pipe = pipe.distinct();
        assert_eq!(pulled.get(), 0);
        assert_eq!(pipe.pull(), Some(1));
        assert_eq!(pulled.get(), 1);
        assert_eq!(pipe.pull(), Some(2));
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_union() {
        let res = Pipe::of(vec![1, 2, 2, 3]).union(Pipe::of(vec![3, 4, 1, 5, 4])).to_vec();
        assert_eq!(res, vec![1, 2, 3, 4, 5]);
        assert_eq!(Pipe::of(vec![1, 1]).union(None::<Pipe<i32>>).to_vec(), vec![1]);
    }

    #[test]
    fn test_except_keeps_multiplicity() {
        let res = Pipe::of(vec![1, 2, 2, 3, 4, 2]).except(Pipe::of(vec![3, 5])).to_vec();
        assert_eq!(res, vec![1, 2, 2, 4, 2]);
        assert_eq!(Pipe::of(vec![1, 2]).except(Pipe::<i32>::empty()).to_vec(), vec![1, 2]);
        assert_eq!(Pipe::<i32>::empty().except(Pipe::of(vec![1])).count(), 0);
    }

    #[test]
    fn test_except_defers_second_drain() {
        let (second, pulled) = counted(vec![1, 2, 3]);
        let mut pipe = Pipe::of(vec![1, 4]).except(second);
        assert_eq!(pulled.get(), 0);
        assert_eq!(pipe.pull(), Some(4));
        assert_eq!(pulled.get(), 3);
        assert_eq!(pipe.pull(), None);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_intersect_yields_each_once() {
        let res = Pipe::of(vec![4, 1, 2, 1, 4, 3]).intersect(Pipe::of(vec![1, 4, 4, 9])).to_vec();
        assert_eq!(res, vec![4, 1]);
    }

    #[test]
    fn test_intersect_empty_inputs() {
        assert_eq!(Pipe::<i32>::empty().intersect(Pipe::of(vec![1])).count(), 0);
        let (first, pulled) = counted(vec![1, 2]);
        assert_eq!(first.intersect(Pipe::<i32>::empty()).count(), 0);
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_set_ops_on_strings() {
        let a = || Pipe::of(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        let b = || Pipe::of(vec!["b".to_string(), "d".to_string()]);
        assert_eq!(a().except(b()).to_vec(), vec!["a", "c"]);
        assert_eq!(a().intersect(b()).to_vec(), vec!["b"]);
        assert_eq!(a().union(b()).to_vec(), vec!["a", "b", "c", "d"]);
    }
}
