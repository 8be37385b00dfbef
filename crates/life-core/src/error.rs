//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid probability: {0}")]
    InvalidProbability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = Error::InvalidDimension("width must be positive, got 0".to_string());
        assert_eq!(err.to_string(), "invalid dimension: width must be positive, got 0");

        let err = Error::InvalidProbability("alive probability must be within [0, 1], got 1.5".to_string());
        assert!(err.to_string().contains("[0, 1]"));
    }
}
