//! Identity port - external identity provider abstraction
//!
//! Authentication itself is delegated to an external identity provider; the
//! core only needs the stable user id that scopes every stored collection.

use async_trait::async_trait;

use crate::domain::result::{Error, Result};

/// Session state as reported by the identity provider
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Whether the provider has finished loading session state
    pub loaded: bool,
    /// Stable identifier of the signed-in user, if any
    pub user_id: Option<String>,
}

impl Session {
    /// The signed-in user id, or `NotAuthenticated`
    ///
    /// A blank id counts as absent.
    pub fn require_user(&self) -> Result<&str> {
        match self.user_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(Error::NotAuthenticated),
        }
    }

    /// Whether a user is signed in
    pub fn signed_in(&self) -> bool {
        self.require_user().is_ok()
    }
}

/// External identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current session state
    async fn session(&self) -> Result<Session>;
}
