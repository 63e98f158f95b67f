//! Executor configuration.
//!
//! The default matches a stock HTTP client: no deadline, no cap on the
//! response body, and no status-code inspection.

use std::time::Duration;

/// What to do with a non-2xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Decode the body whatever the status. A JSON error payload is decoded
    /// as if it were a success payload.
    #[default]
    Ignore,
    /// Fail with `ApiError::HttpStatus` before decoding.
    RequireSuccess,
}

/// Settings for a [`RequestExecutor`](crate::RequestExecutor).
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use ticktack_core::{ExecutorConfig, StatusPolicy};
///
/// let config = ExecutorConfig::default()
///     .timeout(Duration::from_secs(5))
///     .status_policy(StatusPolicy::RequireSuccess);
/// assert_eq!(config.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Deadline for the whole call, connect through body read. Expiry before
    /// the response headers arrive is `ApiError::Send`; expiry while the
    /// body is being read is `ApiError::Read`.
    pub timeout: Option<Duration>,
    /// Cap on the response body read into memory. `None` reads it all.
    pub max_response_bytes: Option<u64>,
    pub status_policy: StatusPolicy,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_response_bytes: None,
            status_policy: StatusPolicy::Ignore,
        }
    }
}

impl ExecutorConfig {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_response_bytes(mut self, limit: u64) -> Self {
        self.max_response_bytes = Some(limit);
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}
