use client::{ApiClient, AuthContext};
use dioxus::prelude::*;
use shared_types::Session;

/// Global authentication state. The session lives only in memory; a reload
/// signs the admin out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear(&mut self) {
        self.session.set(None);
    }

    /// Snapshot handed to the API client.
    pub fn context(&self) -> AuthContext {
        match self.session.peek().clone() {
            Some(session) => AuthContext::from_session(session),
            None => AuthContext::anonymous(),
        }
    }

    pub fn username(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.username.clone())
            .unwrap_or_else(|| "Admin".to_string())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// API client carrying the current session.
pub fn use_api() -> ApiClient {
    let auth = use_auth();
    let base = use_context::<ApiClient>();
    base.with_auth(auth.context())
}
