//! Response envelope shared by all operations

use crate::{AcquiringError, Result};
use serde::{Deserialize, Serialize};

/// A decoded gateway response carrying a business success flag
pub trait ApiResponse {
    /// Envelope fields of the response
    fn base(&self) -> &BaseResponse;

    /// Whether the gateway reported success
    fn is_success(&self) -> bool {
        self.base().success
    }

    /// Convert a reported business failure into an [`AcquiringError::Api`]
    fn error(&self) -> Result<()> {
        self.base().error()
    }
}

/// Envelope fields present in every response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    /// Terminal identifier echoed by the gateway
    #[serde(
        rename = "TerminalKey",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub terminal_key: String,
    /// Business success flag
    #[serde(rename = "Success", default)]
    pub success: bool,
    /// Gateway error code, "0" on success
    #[serde(rename = "ErrorCode", default)]
    pub error_code: String,
    /// Short error description
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Detailed error description
    #[serde(rename = "Details", default)]
    pub details: String,
}

impl BaseResponse {
    /// Return an API error if the gateway reported a business failure
    pub fn error(&self) -> Result<()> {
        if self.success {
            return Ok(());
        }
        Err(AcquiringError::api(
            self.error_code.clone(),
            self.message.clone(),
            self.details.clone(),
        ))
    }
}

impl ApiResponse for BaseResponse {
    fn base(&self) -> &BaseResponse {
        self
    }
}
