//! Domain-specific error types for authentication and related operations
//!
//! Callers receive one generic message for every authentication failure
//! except an active lock, whose expiry timestamp is safe to disclose.
//! Detailed failure reasons stay in the server log.

use chrono::{DateTime, Utc};
use thiserror::Error;

use cg_shared::types::response::ErrorResponse;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown login or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account locked until {until}")]
    AccountLocked { until: DateTime<Utc> },

    #[error("Login already in use")]
    LoginAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Security violations detected before a request reaches storage
///
/// Always logged as a security event; the caller only ever sees the
/// generic message, never which field or rule triggered the rejection.
#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Malicious input detected")]
    InjectionAttempt,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountLocked { .. } => "ACCOUNT_LOCKED",
            AuthError::LoginAlreadyExists => "LOGIN_ALREADY_EXISTS",
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::RegistrationDisabled => "REGISTRATION_DISABLED",
        };

        let response = ErrorResponse::new(error_code, err.to_string());

        // The unlock time is the one failure detail safe to share
        if let AuthError::AccountLocked { until } = &err {
            response.with_detail("locked_until", serde_json::json!(until.to_rfc3339()))
        } else {
            response
        }
    }
}

/// Convert SecurityError to ErrorResponse
impl From<SecurityError> for ErrorResponse {
    fn from(err: SecurityError) -> Self {
        let error_code = match &err {
            SecurityError::InjectionAttempt => "SECURITY_VIOLATION",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_generic() {
        let error = AuthError::InvalidCredentials;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "INVALID_CREDENTIALS");
        assert_eq!(response.message, "Invalid credentials");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_account_locked_carries_expiry() {
        let until = Utc::now() + chrono::Duration::minutes(15);
        let error = AuthError::AccountLocked { until };
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "ACCOUNT_LOCKED");
        let details = response.details.expect("lock response should carry details");
        assert_eq!(details["locked_until"], until.to_rfc3339());
    }

    #[test]
    fn test_security_error_reveals_nothing() {
        let error = SecurityError::InjectionAttempt;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "SECURITY_VIOLATION");
        assert_eq!(response.message, "Malicious input detected");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_validation_error_with_fields() {
        let error = ValidationError::InvalidLength {
            field: "password".to_string(),
            expected: 6,
            actual: 3,
        };
        let message = error.to_string();
        assert!(message.contains("password"));
        assert!(message.contains("expected: 6"));
    }
}
