//! CheckOrder request and response types

use super::request::{BaseRequest, SignedRequest};
use super::response::{ApiResponse, BaseResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query the status of every payment made against an order
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOrderRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    /// Merchant order identifier
    #[serde(rename = "OrderId", skip_serializing_if = "String::is_empty")]
    pub order_id: String,
}

impl CheckOrderRequest {
    /// Create a new check order request
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            base: BaseRequest::default(),
            order_id: order_id.into(),
        }
    }
}

impl SignedRequest for CheckOrderRequest {
    fn token_values(&self) -> HashMap<String, String> {
        HashMap::from([("OrderId".to_string(), self.order_id.clone())])
    }

    fn set_terminal_key(&mut self, terminal_key: &str) {
        self.base.set_terminal_key(terminal_key);
    }

    fn set_token(&mut self, token: String) {
        self.base.set_token(token);
    }
}

/// A single payment attempt belonging to the order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOrderPayment {
    /// Gateway payment identifier
    #[serde(rename = "PaymentId", default)]
    pub payment_id: String,
    /// Amount in kopecks
    #[serde(rename = "Amount", default)]
    pub amount: u64,
    /// Payment status, see [`crate::types::statuses`]
    #[serde(rename = "Status", default)]
    pub status: String,
    /// Retrieval reference number
    #[serde(rename = "RRN", skip_serializing_if = "Option::is_none", default)]
    pub rrn: Option<String>,
    #[serde(rename = "Success", skip_serializing_if = "Option::is_none", default)]
    pub success: Option<bool>,
    #[serde(rename = "ErrorCode", skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// CheckOrder response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOrderResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Merchant order identifier
    #[serde(rename = "OrderId", default)]
    pub order_id: String,
    /// Payments made against the order, oldest first
    #[serde(rename = "Payments", default)]
    pub payments: Vec<CheckOrderPayment>,
}

impl ApiResponse for CheckOrderResponse {
    fn base(&self) -> &BaseResponse {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let mut request = CheckOrderRequest::new("ORD42");
        request.set_terminal_key("TK1");
        request.set_token("abc".to_string());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"TerminalKey": "TK1", "Token": "abc", "OrderId": "ORD42"})
        );
    }

    #[test]
    fn test_empty_order_id_is_omitted_but_signed() {
        let request = CheckOrderRequest::default();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("OrderId").is_none());
        assert_eq!(request.token_values().get("OrderId"), Some(&String::new()));
    }

    #[test]
    fn test_response_decoding() {
        let response: CheckOrderResponse = serde_json::from_str(
            r#"{"TerminalKey":"TK1","OrderId":"ORD42","Success":true,"ErrorCode":"0",
                "Payments":[{"PaymentId":"1","Amount":100,"Status":"CONFIRMED","RRN":"123"}]}"#,
        )
        .unwrap();

        assert!(response.is_success());
        assert_eq!(response.order_id, "ORD42");
        assert_eq!(response.payments.len(), 1);
        assert_eq!(response.payments[0].amount, 100);
        assert_eq!(response.payments[0].rrn.as_deref(), Some("123"));
    }
}
