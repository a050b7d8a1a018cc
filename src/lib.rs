//! This crate provides lazy, pull-based sequence combinators.
//!
//! Every combinator is a small state machine wrapping one or more sources
//! and is itself an `Iterator`, so pipelines compose without ever
//! materializing intermediate collections (except where a combinator's
//! contract requires it: `Cycle`, `Product2` and `Tee`).
//!
//! ```
//! use pulltools::prelude::*;
//!
//! let firsts: Vec<_> = count(1u32, 2)
//!     .takewhile(|&odd| odd < 20)
//!     .islice(1, None, 3)
//!     .collect();
//! assert_eq!(firsts, vec![3, 9, 15]);
//! ```
#![warn(clippy::all)]
#![deny(missing_docs)]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
/// Lazy iterators and their combinators.
pub mod iter;
pub use iter::functions::{
    chain, compress, count, cycle, product2, repeat, repeat_n, tee, zip, zip_fill, zip_longest,
};
/// Import all traits and constructors in prelude to enable combinators.
pub mod prelude;
