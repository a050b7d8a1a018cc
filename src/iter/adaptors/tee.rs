//! Several cursors over one source.
//!
//! All cursors obtained from one `tee` call share a single `TeeBuffer`
//! which owns the source. Each live cursor has its own queue in there,
//! holding the values it has not consumed yet.
//! Whenever a cursor with an empty queue advances we pull one value from the
//! source and append it to every other live queue.
//!
//! Cursors are not `Send`: the buffer sits behind an `Rc<RefCell<_>>` and
//! all advances happen on one thread.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator};
use std::rc::Rc;

struct TeeBuffer<I: Iterator> {
    source: Fuse<I>,
    /// One queue per cursor slot, `None` once the cursor is dropped.
    queues: Vec<Option<VecDeque<I::Item>>>,
}

impl<I: Iterator> TeeBuffer<I> {
    fn next_for(&mut self, slot: usize) -> Option<I::Item>
    where
        I::Item: Clone,
    {
        let own_queue = self.queues.get_mut(slot).and_then(Option::as_mut);
        if let Some(item) = own_queue.and_then(VecDeque::pop_front) {
            return Some(item);
        }
        let item = self.source.next()?;
        for (_, queue) in self
            .queues
            .iter_mut()
            .enumerate()
            .filter(|(other, _)| *other != slot)
        {
            if let Some(queue) = queue {
                queue.push_back(item.clone());
            }
        }
        trace!(slot, buffered = self.buffered(), "tee pulled from source");
        Some(item)
    }

    fn pending(&self, slot: usize) -> usize {
        self.queues
            .get(slot)
            .and_then(Option::as_ref)
            .map_or(0, VecDeque::len)
    }

    fn buffered(&self) -> usize {
        self.queues
            .iter()
            .flatten()
            .map(VecDeque::len)
            .max()
            .unwrap_or(0)
    }

    /// Register a new cursor, positioned like the one in `slot`.
    fn duplicate(&mut self, slot: usize) -> usize
    where
        I::Item: Clone,
    {
        let queue = self.queues.get(slot).cloned().flatten();
        match self.queues.iter().position(Option::is_none) {
            Some(free) => {
                self.queues[free] = queue;
                free
            }
            None => {
                self.queues.push(queue);
                self.queues.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        if let Some(queue) = self.queues.get_mut(slot) {
            *queue = None;
        }
        trace!(slot, buffered = self.buffered(), "tee cursor released");
    }
}

/// One cursor returned by `tee`.
///
/// Cursors advance independently, in any order. Values are kept for a cursor
/// until it consumed them, so memory is bounded by the distance between the
/// fastest and the slowest cursor.
///
/// Cloning a cursor does not copy the source: the clone is one more cursor
/// over the same shared buffer, starting at the position of the cloned cursor.
///
/// # Example
///
/// ```
/// use pulltools::prelude::*;
/// let mut cursors = tee(vec![1, 2, 3], 2).into_iter();
/// let (mut fast, mut slow) = (cursors.next().unwrap(), cursors.next().unwrap());
/// assert_eq!(fast.next(), Some(1));
/// assert_eq!(fast.next(), Some(2));
/// assert_eq!(slow.pending(), 2);
/// let mut copy = fast.clone();
/// assert_eq!(copy.next(), Some(3));
/// assert_eq!(fast.next(), Some(3));
/// assert_eq!(slow.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct Tee<I: Iterator> {
    shared: Rc<RefCell<TeeBuffer<I>>>,
    slot: usize,
}

impl<I: Iterator> Tee<I> {
    /// Split `iter` into `n` cursors.
    pub(crate) fn branches(iter: I, n: usize) -> Vec<Self> {
        let shared = Rc::new(RefCell::new(TeeBuffer {
            source: iter.fuse(),
            queues: (0..n).map(|_| Some(VecDeque::new())).collect(),
        }));
        (0..n)
            .map(|slot| Tee {
                shared: Rc::clone(&shared),
                slot,
            })
            .collect()
    }

    /// Number of values buffered for this cursor.
    pub fn pending(&self) -> usize {
        self.shared.borrow().pending(self.slot)
    }

    /// Number of values pulled from the source that some live cursor still
    /// has to consume.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().buffered()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.shared.borrow_mut().next_for(self.slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let shared = self.shared.borrow();
        let pending = shared.pending(self.slot);
        let (low, high) = shared.source.size_hint();
        (
            low.saturating_add(pending),
            high.and_then(|h| h.checked_add(pending)),
        )
    }
}

impl<I> FusedIterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> Clone for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        let slot = self.shared.borrow_mut().duplicate(self.slot);
        Tee {
            shared: Rc::clone(&self.shared),
            slot,
        }
    }
}

impl<I: Iterator> Drop for Tee<I> {
    fn drop(&mut self) {
        self.shared.borrow_mut().release(self.slot);
    }
}
