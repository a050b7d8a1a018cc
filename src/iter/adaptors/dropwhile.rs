use std::iter::{Fuse, FusedIterator};

/// `DropWhile` is returned by the `dropwhile` method.
#[derive(Clone)]
pub struct DropWhile<I, P> {
    pub(crate) iter: Fuse<I>,
    pub(crate) predicate: P,
    pub(crate) dropping: bool,
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.dropping {
            // the predicate is never looked at again, even if the source runs dry here
            self.dropping = false;
            let predicate = &mut self.predicate;
            self.iter.find(|item| !predicate(item))
        } else {
            self.iter.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        if self.dropping {
            (0, high)
        } else {
            (low, high)
        }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}
