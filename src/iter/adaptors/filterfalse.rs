use std::iter::{Fuse, FusedIterator};

/// `FilterFalse` is returned by the `filterfalse` method.
#[derive(Clone)]
pub struct FilterFalse<I, P> {
    pub(crate) iter: Fuse<I>,
    pub(crate) predicate: P,
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}
