//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when an age token cannot be converted strictly.
pub enum GateError {
    #[error("Invalid age argument: `{0}` is not a whole number")]
    InvalidAge(String),
}
