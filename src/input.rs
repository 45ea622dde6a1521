use crate::Integer;
use crate::pipe::Pipe;
use std::iter::FusedIterator;

impl<T: 'static> Pipe<T> {
    /// 使用固定的有序集合作为输入，可重新构造以再次遍历。
    pub fn of(values: Vec<T>) -> Pipe<T> {
        Pipe::from(values)
    }

    /// 使用任意可迭代对象作为输入。
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iter: I) -> Pipe<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Pipe::new(iter.into_iter())
    }

    /// `None`视作空流水线。
    pub fn from_option(pipe: Option<Pipe<T>>) -> Pipe<T> {
        Pipe::from(pipe)
    }

    /// 单个元素。
    pub fn once(value: T) -> Pipe<T> {
        Pipe::op_wrap(std::iter::once(value))
    }
}

impl<T: Clone + 'static> Pipe<T> {
    /// 重复字面值`count`次，`count`不为正数时无数据。
    pub fn repeat(value: T, count: Integer) -> Pipe<T> {
        if count <= 0 { Pipe::empty() } else { Pipe::op_wrap(std::iter::repeat_n(value, count as usize)) }
    }
}

impl Pipe<Integer> {
    /// 从`start`开始，以步长1生成`count`个整数，`count`不为正数时无数据。
    ///
    /// 到达整数最大值后提前结束。
    pub fn range(start: Integer, count: Integer) -> Pipe<Integer> {
        if count <= 0 {
            return Pipe::empty();
        }
        let end = start.saturating_add(count - 1);
        Pipe::op_wrap(RangeIter::new(start, end, 1))
    }

    /// 生成闭区间`[start, end]`内的整数。
    ///
    /// 步长为正值时正序生成，为负值时从`end`开始逆序生成，为0时无数据。
    /// 如果范围为空（起始值大于结束值），则无数据生成。
    pub fn range_step(start: Integer, end: Integer, step: Integer) -> Pipe<Integer> {
        if step == 0 || start > end {
            return Pipe::empty();
        }
        let iter = RangeIter::new(start, end, step.unsigned_abs());
        if step < 0 { Pipe::op_wrap(iter.rev()) } else { Pipe::op_wrap(iter) }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct RangeIter {
    step: u64,
    next: Integer,
    next_back: Integer,
    done: bool,
}

impl RangeIter {
    fn new(start: Integer, end: Integer, step: u64) -> RangeIter {
        RangeIter { step, next: start, next_back: end, done: start > end }
    }
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next;
        match self.next.checked_add_unsigned(self.step) {
            Some(next) if next <= self.next_back => self.next = next,
            _ => self.done = true,
        }
        Some(res)
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next_back;
        match self.next_back.checked_sub_unsigned(self.step) {
            Some(next_back) if next_back >= self.next => self.next_back = next_back,
            _ => self.done = true,
        }
        Some(res)
    }
}

impl FusedIterator for RangeIter {}
