//! Index based slicing.
use crate::{Error, Result};
use std::iter::{Fuse, FusedIterator};

/// `ISlice` is returned by the `islice` and `try_islice` methods.
///
/// `consumed` counts elements pulled from the source so far,
/// `next_index` is the source index of the next element to emit.
#[derive(Clone)]
pub struct ISlice<I> {
    pub(crate) iter: Fuse<I>,
    pub(crate) consumed: usize,
    pub(crate) next_index: usize,
    pub(crate) stop: Option<usize>,
    pub(crate) step: usize,
    pub(crate) done: bool,
}

impl<I: Iterator> ISlice<I> {
    pub(crate) fn new(iter: I, start: usize, stop: Option<usize>, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        Ok(ISlice {
            iter: iter.fuse(),
            consumed: 0,
            next_index: start,
            stop,
            step,
            done: false,
        })
    }

    /// How many indices of the slice lie below `end`.
    fn emissions_before(&self, end: usize) -> usize {
        let end = self.stop.map_or(end, |stop| stop.min(end));
        if end > self.next_index {
            (end - self.next_index - 1) / self.step + 1
        } else {
            0
        }
    }
}

impl<I: Iterator> Iterator for ISlice<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.stop.map_or(false, |stop| self.next_index >= stop) {
            self.done = true;
            return None;
        }
        match self.iter.nth(self.next_index - self.consumed) {
            Some(item) => {
                // no index past usize::MAX can be reached
                match (
                    self.next_index.checked_add(1),
                    self.next_index.checked_add(self.step),
                ) {
                    (Some(consumed), Some(next_index)) => {
                        self.consumed = consumed;
                        self.next_index = next_index;
                    }
                    _ => self.done = true,
                }
                Some(item)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (low, high) = self.iter.size_hint();
        let low = self.emissions_before(self.consumed.saturating_add(low));
        let high = match (high.and_then(|h| self.consumed.checked_add(h)), self.stop) {
            (Some(end), _) => Some(self.emissions_before(end)),
            (None, Some(stop)) => Some(self.emissions_before(stop)),
            (None, None) => None,
        };
        (low, high)
    }
}

impl<I: Iterator> FusedIterator for ISlice<I> {}
