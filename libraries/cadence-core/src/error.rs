/// Core error types for Cadence
use thiserror::Error;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Core error type for Cadence
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Source rejected or failed authentication
    #[error("Authentication failed for {source_id}: {reason}")]
    Authentication { source_id: String, reason: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error (simulated for mock sources)
    #[error("Network error: {0}")]
    Network(String),
}

impl CadenceError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Authentication {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = CadenceError::not_found("Playlist", "playlist-42");
        assert_eq!(err.to_string(), "Playlist not found: playlist-42");
    }

    #[test]
    fn authentication_message() {
        let err = CadenceError::authentication("spotify", "token rejected");
        assert_eq!(
            err.to_string(),
            "Authentication failed for spotify: token rejected"
        );
    }
}
