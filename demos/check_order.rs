//! Check the payments of an order against the test gateway
//!
//! ```text
//! TINKOFF_TERMINAL_KEY=... TINKOFF_PASSWORD=... cargo run --example check_order -- ORD42
//! ```

use std::env;
use std::time::Duration;
use tinkoff_acquiring::{
    types::{CheckOrderRequest, ClientConfig, Environment},
    AcquiringClient, AcquiringError, RequestContext,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let terminal_key = env::var("TINKOFF_TERMINAL_KEY")?;
    let password = env::var("TINKOFF_PASSWORD")?;
    let order_id = env::args().nth(1).unwrap_or_else(|| "ORD42".to_string());

    let config = ClientConfig::new(terminal_key, password).with_environment(Environment::Test);
    let client = AcquiringClient::with_config(config)?;

    let ctx = RequestContext::with_timeout(Duration::from_secs(10));
    let mut request = CheckOrderRequest::new(order_id);

    match client.check_order_with_context(&ctx, &mut request).await {
        Ok(response) => {
            println!("Order {}", response.order_id);
            for payment in response.payments {
                println!(
                    "  payment {} amount {} status {}",
                    payment.payment_id, payment.amount, payment.status
                );
            }
        }
        Err(AcquiringError::Api { code, message, .. }) => {
            println!("Gateway rejected the request: {} {}", code, message);
        }
        Err(e) if e.is_transport() => {
            println!("Gateway unreachable: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
