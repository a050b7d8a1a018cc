pub use crate::iter::{PullIterator, Selector};
pub use crate::iter::functions::{
    chain, compress, count, cycle, product2, repeat, repeat_n, tee, zip, zip_fill, zip_longest,
};
