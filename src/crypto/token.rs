//! SHA-256 token over sorted request fields

use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Field name under which the terminal key participates in signing
pub const TERMINAL_KEY_FIELD: &str = "TerminalKey";
/// Field name under which the password participates in signing
pub const PASSWORD_FIELD: &str = "Password";

/// Compute the token for a complete field set
///
/// The map must already contain `TerminalKey` and `Password`. Values are
/// joined without separators, so `{"a": "xy", "b": "z"}` and
/// `{"a": "x", "b": "yz"}` share a token; the gateway signs the same way.
pub fn generate_token(fields: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort_unstable();

    let mut hasher = Sha256::new();
    for key in keys {
        hasher.update(fields[key].as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Add the credentials to an operation's signable fields and compute the token
pub fn sign_fields(
    mut fields: HashMap<String, String>,
    terminal_key: &str,
    password: &str,
) -> String {
    fields.insert(TERMINAL_KEY_FIELD.to_string(), terminal_key.to_string());
    fields.insert(PASSWORD_FIELD.to_string(), password.to_string());
    generate_token(&fields)
}
