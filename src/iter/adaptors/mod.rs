//! Adaptor types for pull iterators.
// single source
mod accumulate;
pub use accumulate::Accumulate;
mod dropwhile;
pub use dropwhile::DropWhile;
mod takewhile;
pub use takewhile::TakeWhile;
mod filterfalse;
pub use filterfalse::FilterFalse;
mod groupby;
pub use groupby::GroupBy;
mod interpose;
pub use interpose::Interpose;
mod islice;
pub use islice::ISlice;
// several sources
mod chain;
pub use chain::Chain;
mod compress;
pub use compress::Compress;
mod zip;
pub use zip::{Zip, ZipFill, ZipLongest};
mod cycle;
pub use cycle::Cycle;
mod product;
pub use product::Product2;
mod tee;
pub use tee::Tee;
