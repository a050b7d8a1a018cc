//! `chain` implementation.
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// `Chain` is returned by the `chain` function.
/// We always pull from the first source still alive.
#[derive(Clone)]
pub struct Chain<I> {
    pub(crate) sources: VecDeque<I>,
}

impl<I: Iterator> Iterator for Chain<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(source) = self.sources.front_mut() {
            if let Some(item) = source.next() {
                return Some(item);
            }
            self.sources.pop_front();
            trace!(remaining = self.sources.len(), "chained source exhausted");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(low, high), (source_low, source_high)| {
                let high = match (high, source_high) {
                    (Some(high), Some(source_high)) => high.checked_add(source_high),
                    _ => None,
                };
                (low.saturating_add(source_low), high)
            })
    }
}

impl<I: Iterator> FusedIterator for Chain<I> {}
