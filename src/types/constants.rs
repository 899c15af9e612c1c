//! Common constants for endpoints, paths and payment statuses

/// Gateway base URLs
pub mod endpoints {
    /// Production gateway root
    pub const PRODUCTION_URL: &str = "https://securepay.tinkoff.ru/v2";
    /// Test gateway root
    pub const TEST_URL: &str = "https://rest-api-test.tinkoff.ru/v2";

    /// Order status check
    pub const CHECK_ORDER: &str = "/CheckOrder";
    /// Payment status query
    pub const GET_STATE: &str = "/GetState";
    /// Payment cancellation or refund
    pub const CANCEL: &str = "/Cancel";
}

/// Payment statuses reported by the gateway
pub mod statuses {
    pub const NEW: &str = "NEW";
    pub const FORM_SHOWED: &str = "FORM_SHOWED";
    pub const AUTHORIZING: &str = "AUTHORIZING";
    pub const AUTHORIZED: &str = "AUTHORIZED";
    pub const CONFIRMING: &str = "CONFIRMING";
    pub const CONFIRMED: &str = "CONFIRMED";
    pub const REVERSING: &str = "REVERSING";
    pub const REVERSED: &str = "REVERSED";
    pub const REFUNDING: &str = "REFUNDING";
    pub const PARTIAL_REFUNDED: &str = "PARTIAL_REFUNDED";
    pub const REFUNDED: &str = "REFUNDED";
    pub const REJECTED: &str = "REJECTED";
    pub const CANCELED: &str = "CANCELED";
    pub const DEADLINE_EXPIRED: &str = "DEADLINE_EXPIRED";

    /// Whether the gateway will not move a payment out of this status on its own
    pub fn is_final(status: &str) -> bool {
        matches!(
            status,
            CONFIRMED
                | REVERSED
                | PARTIAL_REFUNDED
                | REFUNDED
                | REJECTED
                | CANCELED
                | DEADLINE_EXPIRED
        )
    }
}
