//! Authentication module
//!
//! Supports: API Key, Basic, Bearer, Custom Headers
//!
//! The `Authenticator` applies the configured credentials to every request
//! issued by the HTTP client.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
