//! Error taxonomy for a protocol session.
//!
//! Every error here is a contract violation or backend failure, never an
//! expected runtime state: a session either completes fully or fails
//! fatally. There is no retry path and no partially sifted key.

use thiserror::Error;

/// Failure of the quantum measurement backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("measurement backend failure: {0}")]
    Backend(String),
}

/// Fatal session-level failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Index-aligned sequences disagree on length. Truncating to the
    /// shortest would silently mask key desynchronization, so this aborts
    /// the session instead.
    #[error("sequence length mismatch ({what}): expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),
}
