//! gRPC client for the NeuroFleetX auth service
//!
//! Used when an auth address is configured; otherwise the app falls back to
//! [`SimulatedCredentialService`](super::SimulatedCredentialService).

use super::traits::CredentialService;
use crate::state::{Registration, Session, SignInCredentials, UserProfile};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("neurofleetx.auth");
}

use proto::auth_service_client::AuthServiceClient;

/// Connect timeout for the auth endpoint
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the remote credential service
pub struct GrpcCredentialService {
    client: AuthServiceClient<Channel>,
    address: String,
}

impl GrpcCredentialService {
    /// Create a client. The channel connects lazily on first call.
    pub fn new(address: &str) -> Result<Self> {
        let channel = Endpoint::from_shared(address.to_string())
            .map_err(|e| anyhow!("Invalid auth address {address}: {e}"))?
            .connect_timeout(CONNECT_TIMEOUT)
            .connect_lazy();

        Ok(Self {
            client: AuthServiceClient::new(channel),
            address: address.to_string(),
        })
    }
}

#[async_trait]
impl CredentialService for GrpcCredentialService {
    async fn sign_in(&self, credentials: &SignInCredentials) -> Result<Session> {
        let request = tonic::Request::new(proto::SignInRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        });

        let response = self
            .client
            .clone()
            .sign_in(request)
            .await
            .map_err(|e| anyhow!("Failed to sign in at {}: {}", self.address, e))?
            .into_inner();

        if response.token.is_empty() {
            return Err(anyhow!("Auth service returned an empty token"));
        }

        Ok(Session {
            token: response.token,
            user: UserProfile {
                name: response.user_name,
                email: if response.user_email.is_empty() {
                    credentials.email.clone()
                } else {
                    response.user_email
                },
            },
        })
    }

    async fn sign_up(&self, registration: &Registration) -> Result<()> {
        let request = tonic::Request::new(proto::SignUpRequest {
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            email: registration.email.clone(),
            phone: registration.phone.clone(),
            password: registration.password.clone(),
        });

        let response = self
            .client
            .clone()
            .sign_up(request)
            .await
            .map_err(|e| anyhow!("Failed to sign up at {}: {}", self.address, e))?;

        tracing::debug!(user_id = %response.into_inner().user_id, "account created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_accepts_http_address() {
        assert!(GrpcCredentialService::new("http://127.0.0.1:50061").is_ok());
    }

    #[tokio::test]
    async fn test_new_rejects_garbage_address() {
        assert!(GrpcCredentialService::new("not a uri").is_err());
    }

    #[tokio::test]
    async fn test_sign_in_against_closed_port_fails() {
        let service = GrpcCredentialService::new("http://127.0.0.1:1").unwrap();
        let creds = SignInCredentials {
            email: "ops@fleet.io".to_string(),
            password: "hunter22".to_string(),
        };
        let err = service.sign_in(&creds).await.unwrap_err();
        assert!(err.to_string().contains("http://127.0.0.1:1"));
    }
}
