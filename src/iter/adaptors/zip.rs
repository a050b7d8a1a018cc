//! Zip structures.
use std::cmp::{max, min};
use std::iter::{Fuse, FusedIterator, Map};

/// `Zip` is returned by the `zip` function.
/// The shorter source decides the length.
#[derive(Clone)]
pub struct Zip<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
    pub(crate) done: bool,
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pair = match self.a.next() {
            Some(left) => self.b.next().map(|right| (left, right)),
            None => None,
        };
        self.done = pair.is_none();
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (low_a, high_a) = self.a.size_hint();
        let (low_b, high_b) = self.b.size_hint();
        let high = match (high_a, high_b) {
            (Some(a), Some(b)) => Some(min(a, b)),
            (a, b) => a.or(b),
        };
        (min(low_a, low_b), high)
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip<A, B> {}

/// `ZipFill` is returned by the `zip_fill` method and function.
/// The shorter source gets padded with its fill value.
#[derive(Clone)]
pub struct ZipFill<A: Iterator, B: Iterator> {
    pub(crate) a: Fuse<A>,
    pub(crate) b: Fuse<B>,
    pub(crate) fill_a: A::Item,
    pub(crate) fill_b: B::Item,
}

/// `ZipLongest` is returned by the `zip_longest` method and function.
/// Both sides are wrapped into `Some` and padded with `None`.
pub type ZipLongest<A, B> = ZipFill<
    Map<A, fn(<A as Iterator>::Item) -> Option<<A as Iterator>::Item>>,
    Map<B, fn(<B as Iterator>::Item) -> Option<<B as Iterator>::Item>>,
>;

impl<A, B> Iterator for ZipFill<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);
    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next()) {
            (Some(left), Some(right)) => Some((left, right)),
            (Some(left), None) => Some((left, self.fill_b.clone())),
            (None, Some(right)) => Some((self.fill_a.clone(), right)),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low_a, high_a) = self.a.size_hint();
        let (low_b, high_b) = self.b.size_hint();
        let high = match (high_a, high_b) {
            (Some(a), Some(b)) => Some(max(a, b)),
            _ => None,
        };
        (max(low_a, low_b), high)
    }
}

impl<A, B> FusedIterator for ZipFill<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
}
