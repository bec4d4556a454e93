use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// A required field was empty or a value was malformed.
    ValidationError,
    /// The submitted role, email, or password did not match the directory.
    AuthError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::AuthError => write!(f, "AuthError"),
        }
    }
}

/// Structured error shared by the login router and the dashboard forms.
///
/// Every failure is recoverable: the UI shows `message` (and any
/// `field_errors`) and returns to its input state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure pinned to a single field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::AuthError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::ValidationError
    }

    pub fn is_auth(&self) -> bool {
        self.kind == AppErrorKind::AuthError
    }

    /// Message for a single field, if the error carries one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_has_correct_kind() {
        let err = AppError::auth("bad credentials");
        assert_eq!(err.kind, AppErrorKind::AuthError);
        assert!(err.is_auth());
        assert!(!err.is_validation());
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("invalid format"));
        assert_eq!(err.field("password"), None);
    }

    #[test]
    fn invalid_field_uses_message_for_both() {
        let err = AppError::invalid_field("role", "Select a role");
        assert!(err.is_validation());
        assert_eq!(err.message, "Select a role");
        assert_eq!(err.field("role"), Some("Select a role"));
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::auth("bad credentials");
        assert_eq!(format!("{}", err), "AuthError: bad credentials");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::invalid_field("name", "too short");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn empty_field_errors_are_omitted_from_json() {
        let json = serde_json::to_string(&AppError::auth("nope")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
