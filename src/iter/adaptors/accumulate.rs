//! Running fold.
use std::iter::FusedIterator;

/// `Accumulate` is returned by the `accumulate` and `cumulative_sum` methods.
///
/// The value to emit next is kept in `pending`: each call emits it and
/// immediately folds the following source element into the new pending value.
#[derive(Clone)]
pub struct Accumulate<I: Iterator, F> {
    pub(crate) iter: I,
    pub(crate) combine: F,
    pub(crate) pending: Option<I::Item>,
    pub(crate) started: bool,
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.pending = self.iter.next();
        }
        let current = self.pending.take()?;
        self.pending = match self.iter.next() {
            Some(following) => Some((self.combine)(current.clone(), following)),
            None => None,
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.started {
            return self.iter.size_hint();
        }
        if self.pending.is_none() {
            return (0, Some(0));
        }
        let (low, high) = self.iter.size_hint();
        (low.saturating_add(1), high.and_then(|h| h.checked_add(1)))
    }
}

impl<I, F> FusedIterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}
