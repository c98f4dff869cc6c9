use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PitchError>;

pub(crate) fn invalid<T>(reason: impl Into<String>) -> Result<T> {
    Err(PitchError::InvalidInput(reason.into()))
}

#[cfg(test)]
mod tests {
    use crate::error::{invalid, PitchError};

    #[test]
    fn test_message() {
        let err = invalid::<()>("row is empty").unwrap_err();
        assert_eq!(err, PitchError::InvalidInput("row is empty".to_string()));
        assert_eq!(err.to_string(), "invalid input: row is empty");
    }
}
