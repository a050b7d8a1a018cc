use std::iter::{Fuse, FusedIterator};

/// `Cycle` is returned by the `cycle` function.
///
/// Everything seen during the first pass is stashed and replayed forever.
/// `replay` stays `None` until the source is exhausted.
/// An empty source gives an empty `Cycle`.
#[derive(Clone)]
pub struct Cycle<I: Iterator> {
    pub(crate) iter: Fuse<I>,
    pub(crate) stash: Vec<I::Item>,
    pub(crate) replay: Option<usize>,
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let index = match self.replay {
            Some(index) => index,
            None => match self.iter.next() {
                Some(item) => {
                    self.stash.push(item.clone());
                    return Some(item);
                }
                None => {
                    trace!(lap = self.stash.len(), "cycle first pass complete");
                    self.replay = Some(0);
                    0
                }
            },
        };
        let item = self.stash.get(index)?.clone();
        self.replay = Some((index + 1) % self.stash.len());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.stash.is_empty() {
            return (usize::MAX, None);
        }
        match self.replay {
            Some(_) => (0, Some(0)),
            None => match self.iter.size_hint() {
                (0, Some(0)) => (0, Some(0)),
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
