//! Free constructors: sources and combinators over several sources.
//! Every source argument is anything `IntoIterator`.
mod count;
pub use count::Count;
mod repeat;
pub use repeat::Repeat;

use crate::iter::{Chain, Compress, Cycle, Product2, Selector, Tee, Zip, ZipFill, ZipLongest};
use std::ops::Add;

/// Infinite arithmetic progression `start`, `start + step`, `start + 2 * step`...
///
/// # Example
///
/// ```
/// use pulltools::count;
/// assert_eq!(count(10, -3).take(4).collect::<Vec<i32>>(), vec![10, 7, 4, 1]);
/// assert_eq!(count(0.5, 0.25).nth(2), Some(1.0));
/// ```
pub fn count<T>(start: T, step: T) -> Count<T>
where
    T: Clone + Add<Output = T>,
{
    Count { next: start, step }
}

/// Repeat `element` forever.
///
/// # Example
///
/// ```
/// use pulltools::repeat;
/// assert_eq!(repeat("spam").take(2).collect::<Vec<_>>(), vec!["spam", "spam"]);
/// ```
pub fn repeat<T: Clone>(element: T) -> Repeat<T> {
    Repeat::new(element, None)
}

/// Repeat `element` exactly `times` times.
///
/// # Example
///
/// ```
/// use pulltools::repeat_n;
/// assert_eq!(repeat_n(7, 3).collect::<Vec<_>>(), vec![7, 7, 7]);
/// assert_eq!(repeat_n(7, 0).next(), None);
/// ```
pub fn repeat_n<T: Clone>(element: T, times: usize) -> Repeat<T> {
    Repeat::new(element, Some(times))
}

/// Concatenate sources, left to right.
/// Empty sources are skipped and do not end the chain.
///
/// # Example
///
/// ```
/// use pulltools::chain;
/// let all: Vec<_> = chain(vec![vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn chain<S>(sources: S) -> Chain<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Chain {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

/// Keep the elements of `data` whose paired selector is selected.
///
/// # Example
///
/// ```
/// use pulltools::compress;
/// let kept: Vec<_> = compress(1..=5, vec![true, false, true]).collect();
/// assert_eq!(kept, vec![1, 3]);
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::IntoIter, S::IntoIter>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Selector,
{
    Compress {
        data: data.into_iter(),
        selectors: selectors.into_iter(),
        done: false,
    }
}

/// Pair elements positionally, stopping with the shorter source.
///
/// # Example
///
/// ```
/// use pulltools::zip;
/// let pairs: Vec<_> = zip(vec![1, 2, 3], "ab".chars()).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip {
        a: a.into_iter(),
        b: b.into_iter(),
        done: false,
    }
}

/// Pair elements positionally until both sources are exhausted,
/// padding the shorter one with its fill value.
///
/// # Example
///
/// ```
/// use pulltools::zip_fill;
/// let pairs: Vec<_> = zip_fill(vec![1, 2, 3], "ab".chars(), 0, 'z').collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'z')]);
/// ```
pub fn zip_fill<A, B>(
    a: A,
    b: B,
    fill_a: A::Item,
    fill_b: B::Item,
) -> ZipFill<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::Item: Clone,
{
    ZipFill {
        a: a.into_iter().fuse(),
        b: b.into_iter().fuse(),
        fill_a,
        fill_b,
    }
}

/// Pair elements positionally until both sources are exhausted,
/// `None` marking the side that ran out.
///
/// # Example
///
/// ```
/// use pulltools::zip_longest;
/// let pairs: Vec<_> = zip_longest(vec![1, 2], Some('a')).collect();
/// assert_eq!(pairs, vec![(Some(1), Some('a')), (Some(2), None)]);
/// ```
pub fn zip_longest<A, B>(a: A, b: B) -> ZipLongest<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::Item: Clone,
{
    let wrap_a: fn(A::Item) -> Option<A::Item> = Some;
    let wrap_b: fn(B::Item) -> Option<B::Item> = Some;
    zip_fill(
        a.into_iter().map(wrap_a),
        b.into_iter().map(wrap_b),
        None,
        None,
    )
}

/// Replay the first pass over `source` forever.
/// Every element is kept, so `source` must be finite.
/// An empty source gives an empty iterator.
///
/// # Example
///
/// ```
/// use pulltools::cycle;
/// assert_eq!(cycle(1..4).take(7).collect::<Vec<_>>(), vec![1, 2, 3, 1, 2, 3, 1]);
/// assert_eq!(cycle(Vec::<u8>::new()).next(), None);
/// ```
pub fn cycle<I>(source: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        iter: source.into_iter().fuse(),
        stash: Vec::new(),
        replay: None,
    }
}

/// Cartesian product of two sources in lexicographic order.
/// `inner` is iterated only once, collected on first use.
///
/// # Example
///
/// ```
/// use pulltools::product2;
/// let pairs: Vec<_> = product2(vec![1, 2], vec!["spam", "eggs"]).collect();
/// assert_eq!(pairs, vec![(1, "spam"), (1, "eggs"), (2, "spam"), (2, "eggs")]);
/// ```
pub fn product2<A, B>(outer: A, inner: B) -> Product2<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::Item: Clone,
{
    Product2::new(outer.into_iter(), inner.into_iter())
}

/// Split `source` into `n` independently advanced cursors.
///
/// # Example
///
/// ```
/// use pulltools::tee;
/// let branches = tee(1..=3, 3);
/// for branch in branches {
///     assert_eq!(branch.collect::<Vec<_>>(), vec![1, 2, 3]);
/// }
/// ```
pub fn tee<I>(source: I, n: usize) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Tee::branches(source.into_iter(), n)
}
