//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::auth::{
    CredentialService, GrpcCredentialService, SimulatedCredentialService, SIGN_IN_DELAY,
    SIGN_UP_DELAY,
};
use std::sync::Arc;

/// Environment override for the auth service address
pub const AUTH_ADDRESS_ENV: &str = "NEUROFLEETX_AUTH_ADDRESS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// gRPC address of the auth service; simulated service when unset
    pub auth_address: Option<String>,
    /// Simulated sign-in latency in milliseconds
    pub sign_in_delay_ms: Option<u64>,
    /// Simulated sign-up latency in milliseconds
    pub sign_up_delay_ms: Option<u64>,
    /// Start the dashboard in dark mode
    pub dark_mode: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "neurofleetx", "neurofleetx-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(address) = std::env::var(AUTH_ADDRESS_ENV) {
            config.apply_auth_override(address);
        }

        Ok(config)
    }

    fn apply_auth_override(&mut self, address: String) {
        if address.trim().is_empty() {
            self.auth_address = None;
        } else {
            self.auth_address = Some(address);
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    /// Simulated service honoring the configured delays
    pub fn simulated_service(&self) -> SimulatedCredentialService {
        SimulatedCredentialService::new(
            self.sign_in_delay_ms
                .map_or(SIGN_IN_DELAY, Duration::from_millis),
            self.sign_up_delay_ms
                .map_or(SIGN_UP_DELAY, Duration::from_millis),
        )
    }

    /// Build the credential service this configuration selects
    pub fn credential_service(&self) -> Result<Arc<dyn CredentialService>> {
        match &self.auth_address {
            Some(address) => {
                tracing::info!(%address, "using remote auth service");
                Ok(Arc::new(GrpcCredentialService::new(address)?))
            }
            None => {
                tracing::info!("no auth address configured, using simulated service");
                Ok(Arc::new(self.simulated_service()))
            }
        }
    }
}
