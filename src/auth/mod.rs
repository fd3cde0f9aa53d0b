//! Credential service: gRPC client and simulated stand-in

mod client;
mod simulated;
mod traits;

pub use client::GrpcCredentialService;
pub use simulated::{SimulatedCredentialService, SIGN_IN_DELAY, SIGN_UP_DELAY};
pub use traits::CredentialService;

#[cfg(test)]
pub use traits::MockCredentialService;
