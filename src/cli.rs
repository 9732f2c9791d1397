//! Validation of the command-line board size.
//!
//! The binary hands the raw positional argument to [`parse_num_cols`] so the
//! accepted range and the error messages can be tested without a process.

use std::num::IntErrorKind;

use thiserror::Error;

/// Rows of pegs used when no argument is given.
pub const DEFAULT_NUM_COLS: u32 = 200;
/// Balls dropped per row of pegs.
pub const BALLS_PER_COL: u64 = 100;

/// Why a board-size argument was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("invalid argument: `{value}` is not an integer")]
    Invalid { value: String },
    #[error("invalid argument: number of rows must be positive, got {value}")]
    NotPositive { value: i32 },
    #[error("argument out of range: `{value}`")]
    OutOfRange { value: String },
}

/// Parse the optional board-size argument.
///
/// Surrounding whitespace is ignored. Anything else that is not a whole
/// number in the signed 32-bit range is rejected, as is any value `<= 0`.
pub fn parse_num_cols(raw: Option<&str>) -> Result<u32, ArgError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_NUM_COLS);
    };

    let value = raw.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ArgError::OutOfRange {
            value: raw.to_string(),
        },
        _ => ArgError::Invalid {
            value: raw.to_string(),
        },
    })?;

    if value <= 0 {
        return Err(ArgError::NotPositive { value });
    }
    Ok(value.unsigned_abs())
}

/// Number of balls dropped for a board with `num_cols` rows.
pub fn num_balls_for(num_cols: u32) -> u64 {
    u64::from(num_cols) * BALLS_PER_COL
}
