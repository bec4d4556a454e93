use crate::{AppError, Destination, Directory, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_BAD_CREDENTIALS: &str = "Invalid username or password for selected role";

/// Raw values from the login form. `role` holds the selector label and is
/// empty until the user picks one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Select a user role"))]
    pub role: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(
        role: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of an accepted login: where to go and whom to greet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginSuccess {
    pub role: Role,
    pub display_name: String,
    pub destination: Destination,
}

/// Basic `local@domain.tld` shape check, equivalent to the regex
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Accepts exactly one `@`, no whitespace, a non-empty local part, and a
/// domain with a `.` that has at least one character on each side. A byte
/// order mark counts as whitespace, as it does for `\s`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace() || c == '\u{feff}') {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check a login form against the credential directory.
///
/// Steps run in order and stop at the first failure:
/// 1. every field non-empty, else `ValidationError`
/// 2. email shape, else `ValidationError`
/// 3. role has an entry and email + password match it exactly, else `AuthError`
#[tracing::instrument(skip_all, fields(role = %request.role))]
pub fn authenticate(request: &LoginRequest, directory: &Directory) -> Result<LoginSuccess, AppError> {
    if let Err(errors) = request.validate() {
        let mut err = AppError::from(errors);
        err.message = MSG_MISSING_FIELDS.to_string();
        tracing::info!("login rejected: missing fields");
        return Err(err);
    }

    if !is_valid_email(&request.email) {
        tracing::info!("login rejected: malformed email");
        return Err(AppError::invalid_field("email", MSG_INVALID_EMAIL));
    }

    let matched = Role::parse(&request.role).and_then(|role| {
        directory
            .credential(role)
            .filter(|entry| entry.email == request.email && entry.password == request.password)
            .map(|_| role)
    });

    let Some(role) = matched else {
        tracing::warn!("login rejected: credentials do not match");
        return Err(AppError::auth(MSG_BAD_CREDENTIALS));
    };

    let display_name = directory
        .display_name(role)
        .unwrap_or(role.as_str())
        .to_string();
    tracing::info!(destination = role.destination().path(), "login accepted");

    Ok(LoginSuccess {
        role,
        display_name,
        destination: role.destination(),
    })
}

/// Login form lifecycle.
///
/// `Idle → Submitting → Success | Rejected`, and `Rejected` may start a new
/// attempt straight away. Transitions that do not apply leave the phase
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Success(LoginSuccess),
    Rejected(AppError),
}

impl LoginPhase {
    /// Start an attempt. Allowed from `Idle` and `Rejected`.
    pub fn begin(self) -> Self {
        match self {
            LoginPhase::Idle | LoginPhase::Rejected(_) => LoginPhase::Submitting,
            other => other,
        }
    }

    /// Record the result of the attempt started by [`LoginPhase::begin`].
    pub fn resolve(self, result: Result<LoginSuccess, AppError>) -> Self {
        match self {
            LoginPhase::Submitting => match result {
                Ok(success) => LoginPhase::Success(success),
                Err(err) => LoginPhase::Rejected(err),
            },
            other => other,
        }
    }

    /// Drop back to `Idle`, e.g. after the rejection alert is dismissed.
    pub fn reset(self) -> Self {
        LoginPhase::Idle
    }

    /// `begin`, `authenticate` and `resolve` in one step.
    pub fn submit(self, request: &LoginRequest, directory: &Directory) -> Self {
        match self.begin() {
            LoginPhase::Submitting => {
                LoginPhase::Submitting.resolve(authenticate(request, directory))
            }
            other => other,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, LoginPhase::Submitting)
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            LoginPhase::Rejected(err) => Some(err),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&LoginSuccess> {
        match self {
            LoginPhase::Success(success) => Some(success),
            _ => None,
        }
    }
}
