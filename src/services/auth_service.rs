//! Domain service for the admin gate.
//!
//! Credential checks never surface store failures to the caller: any
//! problem while verifying is treated as a rejected login.

use async_trait::async_trait;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns true only when the username exists and the password matches
    /// its stored hash. Missing users, store failures and malformed hashes
    /// all yield false.
    async fn verify(&self, username: &str, password: &str) -> bool;
}
