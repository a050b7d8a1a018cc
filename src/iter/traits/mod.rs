//! All traits related to pull iterators:
//! - PullIterator
//! - Selector
pub(crate) mod pull_iterator;
pub(crate) mod selector;
pub use pull_iterator::PullIterator;
pub use selector::Selector;
