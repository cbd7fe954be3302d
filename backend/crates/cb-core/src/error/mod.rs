use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid score: {value} must not be negative {location}")]
    NegativeScore { value: i64, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
