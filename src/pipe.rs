use std::iter::FusedIterator;

/// 惰性流水线。
///
/// 单次遍历、按需拉取的元素序列。每个算子都会消费当前流水线并返回包装了它的新流水线，
/// 上游由下游独占持有，丢弃最外层流水线即释放整条链。
///
/// 拉取协议即[`Iterator::next`]：返回`Some`表示产出下一个元素，返回`None`表示序列结束，
/// 此后的每次拉取都必然返回`None`。所有流水线在构造时都会被融合（fuse），因此即使用户提供的
/// 迭代器在结束后会“复活”，流水线也不会。
pub struct Pipe<T> {
    iter: Box<dyn Iterator<Item = T>>,
}

impl<T> Iterator for Pipe<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> FusedIterator for Pipe<T> {}

impl<T: 'static> Pipe<T> {
    /// 包装任意迭代器，结束后保证不再产出元素。
    pub fn new(iter: impl Iterator<Item = T> + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(iter.fuse()) }
    }

    /// 空流水线，首次拉取即结束。
    pub fn empty() -> Pipe<T> {
        Pipe { iter: Box::new(std::iter::empty()) }
    }

    /// 拉取下一个元素，等价于[`Iterator::next`]。
    #[inline]
    pub fn pull(&mut self) -> Option<T> {
        self.iter.next()
    }

    pub(crate) fn op_map<U: 'static>(self, f: impl FnMut(T) -> U + 'static) -> Pipe<U> {
        Pipe { iter: Box::new(Iterator::map(self, f)) }
    }

    pub(crate) fn op_filter(self, f: impl FnMut(&T) -> bool + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(Iterator::filter(self, f)) }
    }

    pub(crate) fn op_inspect(self, f: impl FnMut(&T) + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(Iterator::inspect(self, f)) }
    }

    /// 包装一个自身已保证融合语义的算子，避免重复融合。
    pub(crate) fn op_wrap(iter: impl FusedIterator<Item = T> + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(iter) }
    }
}

impl<T: 'static> Default for Pipe<T> {
    fn default() -> Self {
        Pipe::empty()
    }
}

impl<T: 'static> From<Option<Pipe<T>>> for Pipe<T> {
    /// `None`视作空流水线。
    fn from(pipe: Option<Pipe<T>>) -> Self {
        pipe.unwrap_or_default()
    }
}

impl<T: 'static> From<Vec<T>> for Pipe<T> {
    fn from(values: Vec<T>) -> Self {
        Pipe::op_wrap(values.into_iter())
    }
}
