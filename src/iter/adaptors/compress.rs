use crate::iter::Selector;
use std::cmp::min;
use std::iter::FusedIterator;

/// `Compress` is returned by the `compress` method and function.
///
/// Data and selectors are pulled one for one, data first.
/// Once either side runs out we never touch the sources again.
#[derive(Clone)]
pub struct Compress<D, S> {
    pub(crate) data: D,
    pub(crate) selectors: S,
    pub(crate) done: bool,
}

impl<D, S> Iterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Selector,
{
    type Item = D::Item;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let datum = match self.data.next() {
                Some(datum) => datum,
                None => break,
            };
            match self.selectors.next() {
                Some(selector) => {
                    if selector.is_selected() {
                        return Some(datum);
                    }
                }
                None => break,
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let high = match (self.data.size_hint().1, self.selectors.size_hint().1) {
            (Some(d), Some(s)) => Some(min(d, s)),
            (d, s) => d.or(s),
        };
        (0, high)
    }
}

impl<D, S> FusedIterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Selector,
{
}
