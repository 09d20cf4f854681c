//! Core error types

use crate::models::LicenseField;

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types shared by the client and the frontend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("El campo {} es obligatorio", .field.label())]
    MissingField { field: LicenseField },

    #[error("El campo {} no es una fecha válida", .field.label())]
    InvalidDate { field: LicenseField },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Token verification failed: {message}")]
    Verification { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a verification error
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// The form field this error refers to, if it is a validation error
    #[must_use]
    pub const fn field(&self) -> Option<LicenseField> {
        match self {
            Self::MissingField { field } | Self::InvalidDate { field } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_exposes_field() {
        let err = CoreError::MissingField {
            field: LicenseField::Category,
        };
        assert_eq!(err.field(), Some(LicenseField::Category));
        assert_eq!(err.to_string(), "El campo Categoría es obligatorio");
        assert_eq!(CoreError::storage("quota").field(), None);
    }
}
