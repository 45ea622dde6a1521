use crate::pipe::Pipe;
use std::iter::FusedIterator;

pub(crate) struct ChunkIter<T> {
    source: Pipe<T>,
    group_size: usize,
}

impl<T> ChunkIter<T> {
    pub(crate) fn new(source: Pipe<T>, group_size: usize) -> ChunkIter<T> {
        ChunkIter { source, group_size }
    }
}

impl<T> Iterator for ChunkIter<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // 首个元素到达后再分配，避免上游结束时产生空分组
        let first = self.source.next()?;
        let mut chunk = Vec::with_capacity(self.group_size.min(1024));
        chunk.push(first);
        while chunk.len() < self.group_size {
            match self.source.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        Some(chunk)
    }
}

impl<T> FusedIterator for ChunkIter<T> {}
