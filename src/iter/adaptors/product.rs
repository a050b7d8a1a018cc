//! Cartesian product of two sources.
use std::iter::{Fuse, FusedIterator};

/// `Product2` is returned by the `product2` method and function.
///
/// The outer source is pulled lazily, one element at a time.
/// The inner source is collected into `pool` the first time it is needed and
/// each outer element then walks the whole pool.
#[derive(Clone)]
pub struct Product2<A: Iterator, B: Iterator> {
    pub(crate) outer: Fuse<A>,
    pub(crate) inner: Option<B>,
    pub(crate) pool: Vec<B::Item>,
    pub(crate) current: Option<A::Item>,
    pub(crate) position: usize,
    pub(crate) done: bool,
}

impl<A, B> Product2<A, B>
where
    A: Iterator,
    B: Iterator,
{
    pub(crate) fn new(outer: A, inner: B) -> Self {
        Product2 {
            outer: outer.fuse(),
            inner: Some(inner),
            pool: Vec::new(),
            current: None,
            position: 0,
            done: false,
        }
    }

    /// Move on to the next outer element, return false when there is none left.
    fn advance_outer(&mut self) -> bool {
        self.current = self.outer.next();
        if self.current.is_none() {
            return false;
        }
        if let Some(inner) = self.inner.take() {
            self.pool = inner.collect();
            trace!(size = self.pool.len(), "product inner source materialized");
        }
        self.position = 0;
        !self.pool.is_empty()
    }
}

impl<A, B> Iterator for Product2<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(outer) = &self.current {
                if let Some(inner) = self.pool.get(self.position) {
                    self.position += 1;
                    return Some((outer.clone(), inner.clone()));
                }
            }
            if !self.advance_outer() {
                self.done = true;
                self.current = None;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (outer_low, outer_high) = self.outer.size_hint();
        let (inner_low, inner_high) = match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (self.pool.len(), Some(self.pool.len())),
        };
        let in_progress = if self.current.is_some() {
            self.pool.len() - self.position
        } else {
            0
        };
        let low = outer_low
            .saturating_mul(inner_low)
            .saturating_add(in_progress);
        let high = outer_high
            .and_then(|o| inner_high.and_then(|i| o.checked_mul(i)))
            .and_then(|h| h.checked_add(in_progress));
        (low, high)
    }
}

impl<A, B> FusedIterator for Product2<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
}
