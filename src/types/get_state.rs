//! GetState request and response types

use super::request::{BaseRequest, SignedRequest};
use super::response::{ApiResponse, BaseResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query the current status of a single payment
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetStateRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    /// Gateway payment identifier
    #[serde(rename = "PaymentId")]
    pub payment_id: String,
    /// Client IP address
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl GetStateRequest {
    /// Create a new get state request
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            base: BaseRequest::default(),
            payment_id: payment_id.into(),
            ip: None,
        }
    }

    /// Set the client IP address
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}

impl SignedRequest for GetStateRequest {
    fn token_values(&self) -> HashMap<String, String> {
        let mut values = HashMap::from([("PaymentId".to_string(), self.payment_id.clone())]);
        if let Some(ip) = &self.ip {
            values.insert("IP".to_string(), ip.clone());
        }
        values
    }

    fn set_terminal_key(&mut self, terminal_key: &str) {
        self.base.set_terminal_key(terminal_key);
    }

    fn set_token(&mut self, token: String) {
        self.base.set_token(token);
    }
}

/// GetState response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStateResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "OrderId", default)]
    pub order_id: String,
    #[serde(rename = "PaymentId", default)]
    pub payment_id: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    /// Amount in kopecks
    #[serde(rename = "Amount", default)]
    pub amount: u64,
}

impl ApiResponse for GetStateResponse {
    fn base(&self) -> &BaseResponse {
        &self.base
    }
}
