//! Lazy iterators

mod traits;
pub use traits::{PullIterator, Selector};
/// Combinator types returned by `PullIterator` methods and constructors.
pub mod adaptors;
pub use adaptors::{
    Accumulate, Chain, Compress, Cycle, DropWhile, FilterFalse, GroupBy, ISlice, Interpose,
    Product2, TakeWhile, Tee, Zip, ZipFill, ZipLongest,
};
/// Sources and free constructors.
pub mod functions;
pub use functions::{Count, Repeat};
