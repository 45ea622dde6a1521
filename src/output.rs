//! 物化算子：持续拉取直到序列结束或结果已确定，产出具体的值或集合。

use crate::Integer;
use crate::err::{LzErr, LzRes};
use crate::pipe::Pipe;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::hash_map::Entry;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::Sum;

impl<T: 'static> Pipe<T> {
    /// 第一个元素，拉取一次即返回。
    pub fn first(mut self) -> Option<T> {
        self.pull()
    }

    /// 第一个满足条件的元素。
    pub fn first_where(mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        Iterator::find(&mut self, pred)
    }

    /// 最后一个元素。
    pub fn last(self) -> Option<T> {
        Iterator::last(self)
    }

    /// 最后一个满足条件的元素。
    pub fn last_where(self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        Iterator::fold(self, None, |found, item| if pred(&item) { Some(item) } else { found })
    }

    /// 指定位置的元素，位置从0开始，负数或越界时返回`None`。
    pub fn element_at(mut self, index: Integer) -> Option<T> {
        let index = usize::try_from(index).ok()?;
        Iterator::nth(&mut self, index)
    }

    /// 是否至少有一个元素。
    pub fn any(mut self) -> bool {
        self.pull().is_some()
    }

    /// 是否至少有一个元素满足条件，遇到第一个满足的元素即停止拉取。
    pub fn any_where(mut self, pred: impl FnMut(T) -> bool) -> bool {
        Iterator::any(&mut self, pred)
    }

    /// 是否所有元素都满足条件，遇到第一个不满足的元素即停止拉取。空序列返回`true`。
    pub fn all(mut self, pred: impl FnMut(T) -> bool) -> bool {
        Iterator::all(&mut self, pred)
    }

    /// 统计数据数量。
    pub fn count(self) -> usize {
        Iterator::count(self)
    }

    /// 统计满足条件的数据数量。
    pub fn count_where(self, mut pred: impl FnMut(&T) -> bool) -> usize {
        Iterator::fold(self, 0, |count, item| if pred(&item) { count + 1 } else { count })
    }

    /// 累加。
    pub fn sum<S: Sum<T>>(self) -> S {
        Iterator::sum(self)
    }

    /// 对每个元素执行操作，按顺序且只执行一次。
    pub fn for_each(self, action: impl FnMut(T)) {
        Iterator::for_each(self, action)
    }

    /// 收集为`Vec`。
    pub fn to_vec(self) -> Vec<T> {
        Iterator::collect(self)
    }

    /// 收集为映射，重复的键保留最后一个值。
    pub fn to_map<K, V>(self, mut key: impl FnMut(&T) -> K, mut value: impl FnMut(T) -> V) -> FxHashMap<K, V>
    where
        K: Eq + Hash,
    {
        Iterator::map(self, |item| (key(&item), value(item))).collect()
    }

    /// 收集为映射，遇到重复的键时返回错误，不再继续拉取。
    pub fn try_to_map<K, V>(
        self, mut key: impl FnMut(&T) -> K, mut value: impl FnMut(T) -> V,
    ) -> LzRes<FxHashMap<K, V>>
    where
        K: Eq + Hash + Debug,
    {
        let mut map = FxHashMap::default();
        for item in self {
            match map.entry(key(&item)) {
                Entry::Occupied(entry) => Err(LzErr::DuplicateKey { key: format!("{:?}", entry.key()) })?,
                Entry::Vacant(entry) => {
                    entry.insert(value(item));
                }
            }
        }
        Ok(map)
    }

    /// 有且仅有一个元素时返回该元素，发现第二个元素时即停止拉取并返回错误。
    pub fn single(mut self) -> LzRes<T> {
        let first = self.pull().ok_or(LzErr::NoElement { op: "single" })?;
        if self.pull().is_some() {
            Err(LzErr::MoreThanOneElement { op: "single" })?
        }
        Ok(first)
    }
}

impl<T: Display + 'static> Pipe<T> {
    /// 使用分隔符合并为字符串。
    pub fn join(mut self, sep: &str) -> String {
        Itertools::join(&mut self, sep)
    }
}

impl<T> Pipe<T>
where
    T: Eq + Hash + 'static,
{
    /// 是否包含指定元素，找到即停止拉取。
    pub fn contains(mut self, value: &T) -> bool {
        Iterator::any(&mut self, |item| item == *value)
    }

    /// 收集为集合。
    pub fn to_set(self) -> FxHashSet<T> {
        Iterator::collect(self)
    }
}
