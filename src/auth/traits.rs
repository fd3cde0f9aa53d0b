//! Trait abstraction for the credential service to enable mocking in tests

use crate::state::{Registration, Session, SignInCredentials};
use anyhow::Result;
use async_trait::async_trait;

/// Sign-in and sign-up against whatever backs the forms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Exchange credentials for a session
    async fn sign_in(&self, credentials: &SignInCredentials) -> Result<Session>;

    /// Create an account. Success does not sign the user in.
    async fn sign_up(&self, registration: &Registration) -> Result<()>;
}
