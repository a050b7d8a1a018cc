use std::iter::FusedIterator;
use std::mem;
use std::ops::Add;

/// Infinite arithmetic progression (see `count` fn).
#[derive(Clone)]
pub struct Count<T> {
    pub(crate) next: T,
    pub(crate) step: T,
}

impl<T> Iterator for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        let following = self.next.clone() + self.step.clone();
        Some(mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Count<T> where T: Clone + Add<Output = T> {}
