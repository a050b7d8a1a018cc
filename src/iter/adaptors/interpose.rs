use std::iter::{Fuse, FusedIterator};

/// `Interpose` is returned by the `interpose` method.
///
/// `next_item` holds the element following the one just emitted: a
/// separator is only due when it exists.
#[derive(Clone)]
pub struct Interpose<I: Iterator> {
    pub(crate) iter: Fuse<I>,
    pub(crate) separator: I::Item,
    pub(crate) next_item: Option<I::Item>,
    pub(crate) started: bool,
    pub(crate) separator_due: bool,
}

impl<I> Iterator for Interpose<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.separator_due {
            self.separator_due = false;
            return Some(self.separator.clone());
        }
        if !self.started {
            self.started = true;
            self.next_item = self.iter.next();
        }
        let current = self.next_item.take()?;
        self.next_item = self.iter.next();
        self.separator_due = self.next_item.is_some();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // remaining elements, each one but the last followed by a separator
        let interposed = |n: usize| n.checked_mul(2).map(|twice| twice.saturating_sub(1));
        let (low, high) = self.iter.size_hint();
        let waiting = self.next_item.is_some() as usize;
        let due = self.separator_due as usize;
        let low = low.saturating_add(waiting);
        let high = high.and_then(|h| h.checked_add(waiting));
        (
            interposed(low).unwrap_or(usize::MAX).saturating_add(due),
            high.and_then(interposed).and_then(|h| h.checked_add(due)),
        )
    }
}

impl<I> FusedIterator for Interpose<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
