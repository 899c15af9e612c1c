//! Request token generation
//!
//! Every call to the Acquiring API carries a `Token` field proving that the
//! sender knows the terminal password. The gateway recomputes the token on
//! its side, so the scheme here must match it byte for byte.
//!
//! # Scheme
//!
//! 1. Take the operation's signable fields and add `TerminalKey` and `Password`.
//! 2. Sort the field names byte-wise ascending.
//! 3. Concatenate the values in that order with no separators.
//! 4. SHA-256 the result and render it as lowercase hex.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use tinkoff_acquiring::crypto::generate_token;
//!
//! let mut fields = HashMap::new();
//! fields.insert("TerminalKey".to_string(), "TK1".to_string());
//! fields.insert("Password".to_string(), "pw".to_string());
//! fields.insert("OrderId".to_string(), "ORD42".to_string());
//!
//! let token = generate_token(&fields);
//! assert_eq!(token.len(), 64);
//! ```

pub mod token;

#[cfg(test)]
mod tests;

pub use token::{generate_token, sign_fields, PASSWORD_FIELD, TERMINAL_KEY_FIELD};
