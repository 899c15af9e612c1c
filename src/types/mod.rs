//! Request, response and configuration types
//!
//! Every gateway operation is a pair of structs: a request implementing
//! [`SignedRequest`] and a response implementing [`ApiResponse`]. The
//! envelope fields shared by all operations live in [`BaseRequest`] and
//! [`BaseResponse`] and are flattened into the operation structs, so the
//! wire format stays a single flat JSON object.
//!
//! # Architecture
//!
//! - [`request`] - Request envelope and the signing capability
//! - [`response`] - Response envelope and business error extraction
//! - [`check_order`], [`get_state`], [`cancel`] - Operation types
//! - [`config`] - Credentials and client configuration
//! - [`environment`] - Production and test gateway selection
//! - [`constants`] - Endpoint paths and payment statuses
//!
//! # Examples
//!
//! ## Building a request
//!
//! ```
//! use tinkoff_acquiring::types::{CheckOrderRequest, SignedRequest};
//!
//! let request = CheckOrderRequest::new("ORD42");
//! let values = request.token_values();
//! assert_eq!(values["OrderId"], "ORD42");
//! ```
//!
//! ## Client configuration
//!
//! ```
//! use tinkoff_acquiring::types::{ClientConfig, Environment};
//! use std::time::Duration;
//!
//! # fn example() -> tinkoff_acquiring::Result<()> {
//! let config = ClientConfig::new("TerminalKey", "Password")
//!     .with_environment(Environment::Test)
//!     .with_timeout(Duration::from_secs(30));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod check_order;
pub mod config;
pub mod constants;
pub mod environment;
pub mod get_state;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use cancel::{CancelRequest, CancelResponse};
pub use check_order::{CheckOrderPayment, CheckOrderRequest, CheckOrderResponse};
pub use config::{ClientConfig, Credentials};
pub use constants::{endpoints, statuses};
pub use environment::Environment;
pub use get_state::{GetStateRequest, GetStateResponse};
pub use request::{BaseRequest, SignedRequest};
pub use response::{ApiResponse, BaseResponse};
