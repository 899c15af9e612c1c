//! Cancel request and response types

use super::request::{BaseRequest, SignedRequest};
use super::response::{ApiResponse, BaseResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cancel an authorized payment or refund a confirmed one
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    /// Gateway payment identifier
    #[serde(rename = "PaymentId")]
    pub payment_id: String,
    /// Amount to return in kopecks; the full amount when absent
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Client IP address
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl CancelRequest {
    /// Create a request cancelling the full payment amount
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            base: BaseRequest::default(),
            payment_id: payment_id.into(),
            amount: None,
            ip: None,
        }
    }

    /// Cancel only part of the payment
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the client IP address
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}

impl SignedRequest for CancelRequest {
    fn token_values(&self) -> HashMap<String, String> {
        let mut values = HashMap::from([("PaymentId".to_string(), self.payment_id.clone())]);
        if let Some(amount) = self.amount {
            values.insert("Amount".to_string(), amount.to_string());
        }
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

/// Cancel response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "OrderId", default)]
    pub order_id: String,
    #[serde(rename = "PaymentId", default)]
    pub payment_id: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    /// Amount before the cancellation, in kopecks
    #[serde(rename = "OriginalAmount", default)]
    pub original_amount: u64,
    /// Amount left after the cancellation, in kopecks
    #[serde(rename = "NewAmount", default)]
    pub new_amount: u64,
}

impl ApiResponse for CancelResponse {
    fn base(&self) -> &BaseResponse {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_cancel_signs_amount() {
        let request = CancelRequest::new("700").with_amount(500);
        let values = request.token_values();
        assert_eq!(values.get("Amount").map(String::as_str), Some("500"));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Amount"], json!(500));
        assert!(value.get("IP").is_none());
    }

    #[test]
    fn test_response_decoding() {
        let response: CancelResponse = serde_json::from_str(
            r#"{"Success":true,"ErrorCode":"0","OrderId":"ORD42","PaymentId":"700",
                "Status":"PARTIAL_REFUNDED","OriginalAmount":1500,"NewAmount":1000}"#,
        )
        .unwrap();
        assert_eq!(response.original_amount, 1500);
        assert_eq!(response.new_amount, 1000);
    }
}
