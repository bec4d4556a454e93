use shared_types::{authenticate, directory, AppError, LoginRequest, LoginSuccess, Role, SupportRequest};

/// Demo credentials shipped in `accounts.toml`, one row per role.
pub const ACCOUNTS: [(Role, &str, &str, &str); 3] = [
    (Role::Agent, "agent@example.com", "agent123", "Ravi Verma"),
    (Role::Customer, "customer@example.com", "cust123", "Sanjay J"),
    (Role::Manager, "manager@example.com", "mgr123", "Sajith P"),
];

/// Run a login attempt against the embedded account directory.
pub fn login(role: &str, email: &str, password: &str) -> Result<LoginSuccess, AppError> {
    authenticate(&LoginRequest::new(role, email, password), directory())
}

/// A support request that passes validation.
pub fn support_request() -> SupportRequest {
    SupportRequest {
        name: "Meera Nair".to_string(),
        email: "meera@example.com".to_string(),
        issue_type: "billing".to_string(),
        description: "I was charged twice this month.".to_string(),
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
