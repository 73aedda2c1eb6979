use shared_types::Session;

/// Authentication context injected into every API call.
///
/// Set at login, cleared at logout; components never read session storage
/// directly, so tests can hand in a fixture session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext {
    session: Option<Session>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { session: None }
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Fixture helper for tests and local tooling.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::from_session(Session {
            token: token.into(),
            role: "admin".to_string(),
            username: String::new(),
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// `Authorization` header value, if a token is present.
    pub fn bearer(&self) -> Option<String> {
        self.session
            .as_ref()
            .filter(|s| !s.token.is_empty())
            .map(|s| format!("Bearer {}", s.token))
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    pub fn role(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.role.as_str())
    }
}
