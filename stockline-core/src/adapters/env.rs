//! Environment-based identity implementation
//!
//! The real application delegates authentication to an external identity
//! provider; for the CLI the signed-in user is taken from the environment
//! (`STOCKLINE_USER`) with the configured default user as fallback.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::ports::{IdentityProvider, Session};

/// Identity provider backed by the `STOCKLINE_USER` environment variable
pub struct EnvIdentity {
    fallback_user: Option<String>,
}

impl EnvIdentity {
    /// Create an identity source with an optional configured fallback user
    pub fn new(fallback_user: Option<String>) -> Self {
        Self { fallback_user }
    }
}

#[async_trait]
impl IdentityProvider for EnvIdentity {
    async fn session(&self) -> Result<Session> {
        let user_id = std::env::var("STOCKLINE_USER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.fallback_user.clone());

        Ok(Session {
            loaded: true,
            user_id,
        })
    }
}
