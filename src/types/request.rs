//! Request envelope shared by all operations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A request that can be signed and sent to the gateway
///
/// Implementors list the fields that take part in the token and expose
/// setters for the two envelope fields the client fills in before sending.
pub trait SignedRequest: Serialize + Send {
    /// Operation-specific fields that participate in the token
    ///
    /// `TerminalKey` and `Password` are added by the client and must not be
    /// returned here.
    fn token_values(&self) -> HashMap<String, String>;

    /// Set the terminal key sent with the request
    fn set_terminal_key(&mut self, terminal_key: &str);

    /// Set the computed token
    fn set_token(&mut self, token: String);
}

/// Envelope fields present in every request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRequest {
    /// Terminal identifier, filled in by the client
    #[serde(rename = "TerminalKey")]
    pub terminal_key: String,
    /// Request token, filled in by the client
    #[serde(rename = "Token")]
    pub token: String,
}

impl BaseRequest {
    pub fn set_terminal_key(&mut self, terminal_key: &str) {
        self.terminal_key = terminal_key.to_string();
    }

    pub fn set_token(&mut self, token: String) {
        self.token = token;
    }
}
