//! Core of `tally`: counting traversals over sequences with caller-supplied
//! visitors. Most users want the `tally` facade crate instead.

pub mod api;
pub mod traversal;

pub use api::{FailurePolicy, TraversalError, TraversalOptions, TraversalOptionsOverride};
pub use traversal::{CancellationToken, Noop, Tally, Traversal, Visit, count, try_count};

#[cfg(feature = "async")]
pub use traversal::{count_async, try_count_async, try_count_stream};

/// Logging for unit tests.
#[cfg(test)]
pub mod test_utils {
    /// Send `tracing` events from the traversal to the test output.
    ///
    /// Defaults to `debug`; `RUST_LOG` overrides it. Safe to call from every
    /// test, only the first call installs the subscriber.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    }
}
