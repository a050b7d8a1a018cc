//! Grouping of consecutive runs.
use std::iter::{Fuse, FusedIterator};

/// `GroupBy` is returned by the `groupby` and `group_equal` methods.
///
/// We look one element ahead: the first element of the following run is
/// stored with its key in `pending` once the current run is complete.
#[derive(Clone)]
pub struct GroupBy<I: Iterator, K, F> {
    pub(crate) iter: Fuse<I>,
    pub(crate) key: F,
    pub(crate) pending: Option<(K, I::Item)>,
}

impl<I, K, F> Iterator for GroupBy<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);
    fn next(&mut self) -> Option<Self::Item> {
        let (run_key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let first = self.iter.next()?;
                ((self.key)(&first), first)
            }
        };
        let mut run = vec![first];
        for item in &mut self.iter {
            let key = (self.key)(&item);
            if key == run_key {
                run.push(item);
            } else {
                self.pending = Some((key, item));
                break;
            }
        }
        Some((run_key, run))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        let waiting = self.pending.is_some() as usize;
        (
            (low > 0 || waiting > 0) as usize,
            high.and_then(|h| h.checked_add(waiting)),
        )
    }
}

impl<I, K, F> FusedIterator for GroupBy<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}
