//! Error types for SkillSphere.

use thiserror::Error;

/// A shared error type for the entire SkillSphere workspace.
///
/// The first four variants are the caller-facing taxonomy (validation,
/// conflict, authentication, missing entity). Their messages are meant to be
/// shown to the user as-is. The remaining variants cover storage and
/// configuration failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SphereError {
    /// Malformed input (bad email, short password, missing required fields)
    #[error("{0}")]
    Validation(String),

    /// Duplicate username or email at registration
    #[error("{0}")]
    Conflict(String),

    /// Unknown login identity or wrong credentials
    #[error("{0}")]
    Auth(String),

    /// Entity not found error with type information
    #[error("{entity_type} not found: '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SphereError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for errors caused by the caller's input rather than by
    /// storage or configuration. These are safe to surface verbatim.
    pub fn is_user_facing(&self) -> bool {
        self.is_validation() || self.is_conflict() || self.is_auth() || self.is_not_found()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SphereError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SphereError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SphereError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SphereError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SphereError>`.
pub type Result<T> = std::result::Result<T, SphereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = SphereError::not_found("Profile", "42");
        assert_eq!(err.to_string(), "Profile not found: '42'");
        assert!(err.is_not_found());
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_taxonomy_messages_are_verbatim() {
        assert_eq!(
            SphereError::validation("Invalid email format").to_string(),
            "Invalid email format"
        );
        assert_eq!(
            SphereError::auth("Invalid credentials").to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_io_error_is_not_user_facing() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SphereError = io.into();
        assert!(matches!(err, SphereError::Io { .. }));
        assert!(!err.is_user_facing());
    }
}
