use fg_core::{AntId, FgError, NestId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FgError),

    #[error("{what} length {got} does not match ant count {expected}")]
    AntCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{ant} belongs to unknown {nest}")]
    UnknownNest { ant: AntId, nest: NestId },

    #[error("{ant} starts inside an obstacle")]
    AntInsideObstacle { ant: AntId },
}

pub type SimResult<T> = Result<T, SimError>;
