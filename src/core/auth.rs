//! Static credential check for the dashboard commands.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Proof of a successful login, handed to the commands that need one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Compare the given user/password against the configured pair.
pub fn login(expected: &Credentials, username: &str, password: &str) -> AppResult<Session> {
    if expected.username.is_empty() {
        return Err(AppError::Config(
            "no dashboard credentials configured (see `brandboard config --edit`)".into(),
        ));
    }

    if username == expected.username && password == expected.password {
        Ok(Session {
            username: username.to_string(),
        })
    } else {
        Err(AppError::Unauthorized)
    }
}
