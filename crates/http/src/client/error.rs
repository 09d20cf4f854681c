//! Client error types

use crate::types::ErrorBody;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Token missing, expired or rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflicting resource, e.g. a duplicate license number
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// No token in storage for an endpoint that needs one
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 | 422 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Build an error from a response body, preferring the backend's `message`.
    ///
    /// The message is left empty when the body carries no text, so callers
    /// fall back to their own wording.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_default();
        Self::from_status(status, message)
    }

    /// Whether the session should be treated as expired
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::NotAuthenticated)
    }

    /// Message suitable for a notification: the backend's own text for
    /// business errors, `fallback` for server faults and everything else
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::BadRequest(message)
            | Self::Conflict(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            Self::AuthenticationFailed(_) | Self::NotAuthenticated => {
                "Tu sesión ha expirado. Inicia sesión nuevamente.".to_string()
            }
            Self::Request(e) if !e.is_decode() => {
                "No se pudo conectar con el servidor.".to_string()
            }
            _ => fallback.to_string(),
        }
    }

    /// Message for a failed sign-in, where a 401 means rejected credentials
    /// rather than an expired session
    pub fn signin_message(&self, fallback: &str) -> String {
        match self {
            Self::AuthenticationFailed(message) if !message.is_empty() => message.clone(),
            Self::AuthenticationFailed(_) => fallback.to_string(),
            other => other.user_message(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_body_message_is_preferred() {
        let err = ClientError::from_body(
            StatusCode::CONFLICT,
            r#"{"message":"La licencia ya existe"}"#,
        );
        assert!(matches!(&err, ClientError::Conflict(m) if m == "La licencia ya existe"));
        assert_eq!(err.user_message("Error"), "La licencia ya existe");
    }

    #[test]
    fn test_plain_text_body() {
        let err = ClientError::from_body(StatusCode::BAD_REQUEST, "missing category");
        assert!(matches!(err, ClientError::BadRequest(m) if m == "missing category"));
    }

    #[test]
    fn test_empty_body_leaves_message_empty() {
        let err = ClientError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert!(matches!(
            err,
            ClientError::ServerError { status: 500, ref message } if message.is_empty()
        ));
    }

    #[test]
    fn test_rejected_credentials_without_body_use_fallback() {
        const FALLBACK: &str = "Usuario o contraseña incorrectos.";

        let err = ClientError::from_body(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.signin_message(FALLBACK), FALLBACK);

        let err = ClientError::from_body(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Usuario bloqueado"}"#,
        );
        assert_eq!(err.signin_message(FALLBACK), "Usuario bloqueado");
    }

    #[test]
    fn test_signin_business_errors_use_backend_message() {
        let err = ClientError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Falta el usuario"}"#,
        );
        assert_eq!(err.signin_message("Error"), "Falta el usuario");
    }

    #[test]
    fn test_auth_expiry_detection() {
        assert!(ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()).is_auth_expired());
        assert!(ClientError::NotAuthenticated.is_auth_expired());
        assert!(!ClientError::Forbidden("no".into()).is_auth_expired());
    }

    #[test]
    fn test_server_fault_uses_fallback() {
        let err = ClientError::from_body(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        assert_eq!(err.user_message("No se pudo guardar"), "No se pudo guardar");
    }

    #[test]
    fn test_generic_fallback() {
        let err = ClientError::Configuration("bad".into());
        assert_eq!(err.user_message("No se pudo guardar"), "No se pudo guardar");
    }
}
