#![allow(dead_code)]
use std::cell::Cell;
use std::rc::Rc;

/// Wraps a source and counts calls to `next`, exhausted ones included.
pub struct Counted<I> {
    iter: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.iter.next()
    }
}

pub fn counted<I: IntoIterator>(iterable: I) -> (Counted<I::IntoIter>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    (
        Counted {
            iter: iterable.into_iter(),
            pulls: pulls.clone(),
        },
        pulls,
    )
}

/// A badly behaved source replaying `script`, `None`s included, then
/// returning `None` forever.
pub struct Scripted<T> {
    script: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for Scripted<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.script.next().unwrap_or(None)
    }
}

pub fn scripted<T>(script: Vec<Option<T>>) -> Scripted<T> {
    Scripted {
        script: script.into_iter(),
    }
}
