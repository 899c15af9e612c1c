//! # Tinkoff Acquiring client
//!
//! A typed, token-signing client for the Tinkoff Acquiring payment API (v2).
//!
//! ## Features
//!
//! - **Request signing**: every request carries a SHA-256 `Token` computed over
//!   its fields and the terminal password, the way the gateway expects
//! - **Typed operations**: `CheckOrder`, `GetState` and `Cancel` with typed
//!   request and response structs
//! - **Layered errors**: transport, HTTP status, decode and business failures
//!   are distinct [`AcquiringError`] variants
//! - **Pluggable transport**: any [`transport::HttpTransport`] can replace the
//!   default `reqwest` client, which keeps tests off the network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinkoff_acquiring::{AcquiringClient, types::CheckOrderRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AcquiringClient::new("TerminalKey", "Password")?;
//!
//!     let mut request = CheckOrderRequest::new("ORD42");
//!     let response = client.check_order(&mut request).await?;
//!
//!     for payment in response.payments {
//!         println!("{}: {} ({})", payment.payment_id, payment.amount, payment.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Request/response envelopes, operation types and configuration
//! - **`client`**: Request dispatch and typed operation wrappers
//! - **`crypto`**: Request token generation
//! - **`transport`**: HTTP transport abstraction
//! - **`error`**: Error handling

pub mod client;
pub mod crypto;
pub mod error;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{AcquiringClient, RequestContext};
pub use error::{AcquiringError, Result};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        let request = CheckOrderRequest::new("ORD42");
        assert_eq!(request.order_id, "ORD42");
        assert_eq!(Environment::default(), Environment::Production);
        assert!(statuses::is_final(statuses::CONFIRMED));
    }
}
