use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

/// Authenticated admin session as returned by `POST /admin/login`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginForm {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}
