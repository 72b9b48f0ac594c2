//! Error types for balance solving.

use tb_core::error::TbError;
use thiserror::Error;

/// Errors that can occur while setting up or running a balance solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("Invalid parameters: {what}")]
    InvalidParameters { what: String },

    #[error("Room temperature diverged at iteration {iteration}: {room_temp}")]
    Diverged { iteration: usize, room_temp: f64 },

    #[error("Numeric error: {0}")]
    Core(#[from] TbError),
}

pub type BalanceResult<T> = Result<T, BalanceError>;
