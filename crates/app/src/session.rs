use dioxus::prelude::*;
use shared_types::{LoginSuccess, Role};

/// Who is signed in, shared by every view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub current: Signal<Option<LoginSuccess>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    pub fn sign_in(&mut self, success: LoginSuccess) {
        tracing::info!(role = %success.role, "session started");
        self.current.set(Some(success));
    }

    pub fn sign_out(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::info!(role = %previous.role, "session ended");
        }
    }

    /// Name to greet on the `role` dashboard.
    pub fn greeting_for(&self, role: Role) -> String {
        greeting_name(self.current.read().as_ref(), role)
    }
}

/// Hook to access the session.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// The signed-in display name when it belongs to `role`, otherwise the role
/// label. Covers dashboards opened directly by URL.
pub fn greeting_name(session: Option<&LoginSuccess>, role: Role) -> String {
    session
        .filter(|s| s.role == role && !s.display_name.is_empty())
        .map(|s| s.display_name.clone())
        .unwrap_or_else(|| role.as_str().to_string())
}
