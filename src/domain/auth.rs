use serde::{Deserialize, Serialize};

// The serialization within this layer is a dependency leak, but it's a pragmatic approach.
// Field names match the JSON schemas of the KS API auth endpoints.

// Email/password pair used by login, register and resend-code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Payload for confirming a fresh registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRegistration {
    pub email: String,
    pub verification_code: String,
}

// Payload for requesting a password reset code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordCode {
    pub email: String,
}

// Payload for confirming a reset code and setting the new password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPassword {
    pub email: String,
    pub verification_code: String,
    pub password: String,
}

// Returned by login. The KS API answers with the bare token string; the
// wrapped object form is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Bare(String),
    Wrapped { token: String },
}

impl LoginResponse {
    pub fn token(&self) -> &str {
        match self {
            Self::Bare(token) | Self::Wrapped { token } => token,
        }
    }
}

// Returned by every other auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
