use std::iter::FusedIterator;

/// The same value, a given number of times or forever (see `repeat` and
/// `repeat_n` fns).
#[derive(Clone)]
pub struct Repeat<T> {
    element: Option<T>,
    remaining: Option<usize>,
}

impl<T> Repeat<T> {
    /// Repeat `element` `times` times, or forever when `times` is `None`.
    ///
    /// ```
    /// use pulltools::iter::Repeat;
    /// assert_eq!(Repeat::new('x', Some(2)).collect::<String>(), "xx");
    /// assert_eq!(Repeat::new('x', None).take(3).count(), 3);
    /// ```
    pub fn new(element: T, times: Option<usize>) -> Self {
        Repeat {
            element: if times == Some(0) {
                None
            } else {
                Some(element)
            },
            remaining: times,
        }
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            None => self.element.clone(),
            Some(0) => None,
            Some(1) => {
                // last one, no need to clone
                self.remaining = Some(0);
                self.element.take()
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                self.element.clone()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (usize::MAX, None),
            Some(n) => (n, Some(n)),
        }
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}
