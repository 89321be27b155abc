//! Setup-time errors shared by the `fg-*` crates.
//!
//! A running simulation never fails; these surface while a config is
//! validated or a world is seeded.  fg-sim wraps `FgError` in its own enum.

use thiserror::Error;

use crate::SpotId;

#[derive(Debug, Error)]
pub enum FgError {
    #[error("food spot {0} not found")]
    SpotNotFound(SpotId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fg-*` crates.
pub type FgResult<T> = Result<T, FgError>;
