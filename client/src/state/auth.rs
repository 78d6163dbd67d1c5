//! Identity state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the signal identity provider. Navigation chrome reads it to pick the
//! account surface (admin or customer) and to show the login links.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ProviderError;
use crate::net::types::Session;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first `/api/auth/me` response arrives.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Apply a fetch outcome. An outage degrades to anonymous and is returned
    /// so the caller can log it.
    pub fn resolve(&mut self, result: Result<Option<Session>, ProviderError>) -> Option<ProviderError> {
        self.loading = false;
        match result {
            Ok(session) => {
                self.session = session;
                None
            }
            Err(e) => {
                self.session = None;
                Some(e)
            }
        }
    }

    /// Drop the session after logout.
    pub fn clear(&mut self) {
        self.session = None;
        self.loading = false;
    }
}
