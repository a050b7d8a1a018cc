//! Iterator governing traits.
use crate::iter::{
    Accumulate, Compress, DropWhile, FilterFalse, GroupBy, ISlice, Interpose, Product2, TakeWhile,
    Tee, ZipFill, ZipLongest,
};
use crate::prelude::*;
use crate::Result;
use std::ops::Add;

/// This trait adds all single source combinators to every `Iterator`.
///
/// Each method takes the iterator by value: once wrapped, a source can
/// only be advanced through its combinator.
/// Names never shadow the methods `Iterator` already provides.
pub trait PullIterator: Iterator + Sized {
    /// Running fold: the first output is the first input, then each output
    /// is `combine(previous_output, next_input)`.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let maxes: Vec<u32> = vec![3, 1, 4, 1, 5].into_iter().accumulate(std::cmp::max).collect();
    /// assert_eq!(maxes, vec![3, 3, 4, 4, 5]);
    /// ```
    fn accumulate<F>(self, combine: F) -> Accumulate<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate {
            iter: self,
            combine,
            pending: None,
            started: false,
        }
    }

    /// Running sums.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// assert_eq!((1..5).cumulative_sum().collect::<Vec<_>>(), vec![1, 3, 6, 10]);
    /// ```
    fn cumulative_sum(self) -> Accumulate<Self, fn(Self::Item, Self::Item) -> Self::Item>
    where
        Self::Item: Add<Output = Self::Item> + Clone,
    {
        let add: fn(Self::Item, Self::Item) -> Self::Item = Add::add;
        self.accumulate(add)
    }

    /// Keep elements whose paired selector is selected.
    /// Stops as soon as data or selectors run out.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let kept: String = "ABCDEF".chars().compress(vec![1, 0, 1, 0, 1, 1]).collect();
    /// assert_eq!(kept, "ACEF");
    /// ```
    fn compress<S>(self, selectors: S) -> Compress<Self, S::IntoIter>
    where
        S: IntoIterator,
        S::Item: Selector,
    {
        Compress {
            data: self,
            selectors: selectors.into_iter(),
            done: false,
        }
    }

    /// Skip the longest prefix satisfying `predicate` then yield everything else.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let rest: Vec<_> = vec![1, 4, 6, 4, 1].into_iter().dropwhile(|&x| x < 5).collect();
    /// assert_eq!(rest, vec![6, 4, 1]);
    /// ```
    fn dropwhile<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile {
            iter: self.fuse(),
            predicate,
            dropping: true,
        }
    }

    /// Yield elements while `predicate` holds, stop forever at the first failure.
    /// The failing element is consumed and discarded.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let prefix: Vec<_> = vec![1, 4, 6, 4, 1].into_iter().takewhile(|&x| x < 5).collect();
    /// assert_eq!(prefix, vec![1, 4]);
    /// ```
    fn takewhile<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile {
            iter: self,
            predicate,
            done: false,
        }
    }

    /// Yield only elements for which `predicate` is false.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let odds: Vec<_> = (0..10).filterfalse(|x| x % 2 == 0).collect();
    /// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    /// ```
    fn filterfalse<P>(self, predicate: P) -> FilterFalse<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        FilterFalse {
            iter: self.fuse(),
            predicate,
        }
    }

    /// Group consecutive runs of elements sharing the same key.
    /// Each run yields its key and all its elements.
    /// Equal keys separated by another key give separate groups.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let groups: Vec<_> = vec![0, 1, 3, 5, 4].into_iter().groupby(|x| x % 2).collect();
    /// assert_eq!(groups, vec![(0, vec![0]), (1, vec![1, 3, 5]), (0, vec![4])]);
    /// ```
    fn groupby<K, F>(self, key: F) -> GroupBy<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        GroupBy {
            iter: self.fuse(),
            key,
            pending: None,
        }
    }

    /// Group consecutive runs of equal elements.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let runs: Vec<_> = "aabccc".chars().group_equal().map(|(c, run)| (c, run.len())).collect();
    /// assert_eq!(runs, vec![('a', 2), ('b', 1), ('c', 3)]);
    /// ```
    fn group_equal(self) -> GroupBy<Self, Self::Item, fn(&Self::Item) -> Self::Item>
    where
        Self::Item: Clone + PartialEq,
    {
        let identity: fn(&Self::Item) -> Self::Item = Clone::clone;
        self.groupby(identity)
    }

    /// Yield elements separated by `separator`, no leading or trailing one.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let spaced: String = "abc".chars().interpose('-').collect();
    /// assert_eq!(spaced, "a-b-c");
    /// ```
    fn interpose(self, separator: Self::Item) -> Interpose<Self>
    where
        Self::Item: Clone,
    {
        Interpose {
            iter: self.fuse(),
            separator,
            next_item: None,
            started: false,
            separator_due: false,
        }
    }

    /// Yield the elements at indices `start`, `start + step`, ... below `stop`
    /// (unbounded when `stop` is `None`).
    ///
    /// Skipped elements are pulled from the source.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. See `try_islice` for a fallible version.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// assert_eq!((0..10).islice(2, Some(6), 2).collect::<Vec<_>>(), vec![2, 4]);
    /// assert_eq!((0..).islice(3, None, 3).take(3).collect::<Vec<_>>(), vec![3, 6, 9]);
    /// ```
    fn islice(self, start: usize, stop: Option<usize>, step: usize) -> ISlice<Self> {
        match self.try_islice(start, stop, step) {
            Ok(slice) => slice,
            Err(e) => panic!("{}", e),
        }
    }

    /// Same as `islice` but report a zero `step` as an error.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// use pulltools::Error;
    /// assert_eq!((0..10).try_islice(0, None, 0).err(), Some(Error::ZeroStep));
    /// ```
    fn try_islice(self, start: usize, stop: Option<usize>, step: usize) -> Result<ISlice<Self>> {
        ISlice::new(self, start, stop, step)
    }

    /// Pair elements with the ones of `other`, padding the shorter side with
    /// its fill value until both are exhausted.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let pairs: Vec<_> = vec![1, 2, 3].into_iter().zip_fill(vec!['a'], 0, 'z').collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'z'), (3, 'z')]);
    /// ```
    fn zip_fill<J>(
        self,
        other: J,
        fill_self: Self::Item,
        fill_other: J::Item,
    ) -> ZipFill<Self, J::IntoIter>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
    {
        zip_fill(self, other, fill_self, fill_other)
    }

    /// Pair elements with the ones of `other`, `None` marking the side that ran out.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let pairs: Vec<_> = vec![1].into_iter().zip_longest(vec!['a', 'b']).collect();
    /// assert_eq!(pairs, vec![(Some(1), Some('a')), (None, Some('b'))]);
    /// ```
    fn zip_longest<J>(self, other: J) -> ZipLongest<Self, J::IntoIter>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
    {
        zip_longest(self, other)
    }

    /// Cartesian product with `other`, in lexicographic order.
    /// `other` is collected once, on first use.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let pairs: Vec<_> = (1..3).product2(vec!['a', 'b']).collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    fn product2<J>(self, other: J) -> Product2<Self, J::IntoIter>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
    {
        product2(self, other)
    }

    /// Split into `n` independent cursors over a shared buffer.
    ///
    /// Example:
    ///
    /// ```
    /// use pulltools::prelude::*;
    /// let mut cursors = (0..3).tee(2);
    /// let second = cursors.pop().unwrap();
    /// let first = cursors.pop().unwrap();
    /// assert_eq!(first.collect::<Vec<_>>(), vec![0, 1, 2]);
    /// assert_eq!(second.collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    fn tee(self, n: usize) -> Vec<Tee<Self>>
    where
        Self::Item: Clone,
    {
        tee(self, n)
    }
}

impl<I: Iterator> PullIterator for I {}
