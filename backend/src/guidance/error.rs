//! Guidance errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidanceError {
    #[error("Please enter student name.")]
    EmptyName,

    #[error("Academic score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(i64),

    #[error("Academic score must be a whole number, got {0:?}")]
    InvalidScore(String),

    #[error("Unknown area of interest: {0}")]
    UnknownInterest(String),

    #[error("Unknown primary skill: {0}")]
    UnknownSkill(String),

    #[error("No suitable career found.")]
    NoMatch,

    #[error("Career store is unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl GuidanceError {
    /// Rejected input, as opposed to a failure of the service itself
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GuidanceError::EmptyName
                | GuidanceError::ScoreOutOfRange(_)
                | GuidanceError::InvalidScore(_)
                | GuidanceError::UnknownInterest(_)
                | GuidanceError::UnknownSkill(_)
        )
    }
}

pub type GuidanceResult<T> = Result<T, GuidanceError>;
