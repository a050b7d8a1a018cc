//! Truthiness of `compress` selectors.

/// Values able to decide whether `compress` keeps the paired datum.
///
/// Booleans select when true, integers select when nonzero.
///
/// # Example
///
/// ```
/// use pulltools::prelude::*;
/// assert!(true.is_selected());
/// assert!(!0u8.is_selected());
/// assert!((-3i64).is_selected());
/// ```
pub trait Selector {
    /// Should the paired datum be kept.
    fn is_selected(&self) -> bool;
}

impl Selector for bool {
    fn is_selected(&self) -> bool {
        *self
    }
}

impl<'a, S: Selector + ?Sized> Selector for &'a S {
    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

macro_rules! nonzero_selects {
    ($($t:ty),*) => {
        $(
            impl Selector for $t {
                fn is_selected(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

nonzero_selects!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
