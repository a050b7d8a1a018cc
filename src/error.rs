//! Construction errors.
use thiserror::Error;

/// Precondition violations detected when building a combinator.
///
/// Advancing a combinator never fails: running out of values is reported
/// as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `islice` needs a step of at least one.
    #[error("slice step must be at least one")]
    ZeroStep,
}

/// Result type of fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;
