//! Engine error taxonomy.
//!
//! Only configuration problems surface as values: a predicate that matches
//! nothing is a silent no-op, and binding past the pool's capacity is a
//! logic-invariant violation (assert), not a recoverable condition.

use thiserror::Error;

/// Fatal construction-time failures.
#[derive(Debug, Error)]
pub enum RingError {
    /// A required configuration value or host capability is unusable.
    #[error("invalid ring configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl RingError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        RingError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
