//! Logging is only compiled in with the `logs` feature.

/// Emit a `tracing` event at trace level when the `logs` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logs")]
        tracing::trace!(target: "pulltools", $($arg)*);
    };
}
