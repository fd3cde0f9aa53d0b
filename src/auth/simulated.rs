//! Stand-in credential service that waits a fixed delay and accepts everyone

use super::traits::CredentialService;
use crate::state::{Registration, Session, SignInCredentials, UserProfile};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Default simulated sign-in latency
pub const SIGN_IN_DELAY: Duration = Duration::from_millis(1000);
/// Default simulated sign-up latency
pub const SIGN_UP_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct SimulatedCredentialService {
    sign_in_delay: Duration,
    sign_up_delay: Duration,
    fail: bool,
}

impl SimulatedCredentialService {
    pub fn new(sign_in_delay: Duration, sign_up_delay: Duration) -> Self {
        Self {
            sign_in_delay,
            sign_up_delay,
            fail: false,
        }
    }

    /// Zero-latency variant for deterministic tests
    #[cfg(test)]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Every call fails after its delay
    #[cfg(test)]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedCredentialService {
    fn default() -> Self {
        Self::new(SIGN_IN_DELAY, SIGN_UP_DELAY)
    }
}

/// Display name derived from the mailbox part of an address
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Fleet Operator".to_string(),
    }
}

#[async_trait]
impl CredentialService for SimulatedCredentialService {
    async fn sign_in(&self, credentials: &SignInCredentials) -> Result<Session> {
        tracing::info!(email = %credentials.email, "simulated sign-in attempt");
        self.pause(self.sign_in_delay).await;
        if self.fail {
            return Err(anyhow!("simulated sign-in failure"));
        }
        Ok(Session {
            token: Uuid::new_v4().to_string(),
            user: UserProfile {
                name: name_from_email(&credentials.email),
                email: credentials.email.clone(),
            },
        })
    }

    async fn sign_up(&self, registration: &Registration) -> Result<()> {
        tracing::info!(email = %registration.email, "simulated registration attempt");
        self.pause(self.sign_up_delay).await;
        if self.fail {
            return Err(anyhow!("simulated sign-up failure"));
        }
        Ok(())
    }
}
