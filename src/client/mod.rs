//! Acquiring API client
//!
//! [`AcquiringClient`] signs requests with the terminal credentials, posts
//! them as JSON and classifies the result. Failures come back in layers:
//!
//! - transport: [`AcquiringError::Transport`] or [`AcquiringError::Timeout`]
//!   when no HTTP status was received
//! - status: [`AcquiringError::Status`] for anything other than 200, 201, 204
//! - decode: [`AcquiringError::Decode`] when the body does not match
//! - API: [`AcquiringError::Api`] when a 2xx body reports `"Success": false`
//!
//! # Examples
//!
//! ## Checking an order
//!
//! ```no_run
//! use tinkoff_acquiring::client::AcquiringClient;
//! use tinkoff_acquiring::types::CheckOrderRequest;
//!
//! # async fn example() -> tinkoff_acquiring::Result<()> {
//! let client = AcquiringClient::new("TerminalKey", "Password")?;
//!
//! let mut request = CheckOrderRequest::new("ORD42");
//! let response = client.check_order(&mut request).await?;
//! for payment in &response.payments {
//!     println!("{} {} {}", payment.payment_id, payment.amount, payment.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw dispatch with a deadline
//!
//! ```no_run
//! use std::time::Duration;
//! use tinkoff_acquiring::client::{AcquiringClient, RequestContext};
//! use tinkoff_acquiring::types::{CheckOrderRequest, CheckOrderResponse};
//!
//! # async fn example() -> tinkoff_acquiring::Result<()> {
//! let client = AcquiringClient::new("TerminalKey", "Password")?;
//! let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//!
//! let mut request = CheckOrderRequest::new("ORD42");
//! let response = client
//!     .post_request_with_context(&ctx, "/CheckOrder", &mut request)
//!     .await?;
//! let decoded: CheckOrderResponse = client.decode_response(response).await?;
//! # Ok(())
//! # }
//! ```

use crate::crypto::sign_fields;
use crate::transport::HttpTransport;
use crate::types::config::validate_base_url;
use crate::types::{ApiResponse, ClientConfig, Credentials, SignedRequest};
use crate::{AcquiringError, Result};
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Method, StatusCode};
use reqwest::{Client, Request, Response, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

mod operations;


/// Per-call options for a single dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Deadline for the whole call, measured from when it starts;
    /// falls back to the client's configured timeout when absent
    pub timeout: Option<Duration>,
}

impl RequestContext {
    /// Context using the client's default deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that gives up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Client for the Tinkoff Acquiring API
#[derive(Clone)]
pub struct AcquiringClient {
    credentials: Credentials,
    /// Gateway root URL
    base_url: String,
    /// Deadline applied when a call's context sets none
    timeout: Option<Duration>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AcquiringClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcquiringClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl AcquiringClient {
    /// Create a client for the production gateway
    pub fn new(terminal_key: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(terminal_key, password))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let transport = match config.transport {
            Some(transport) => transport,
            None => {
                let client = Client::builder().build().map_err(|e| {
                    AcquiringError::config(format!("Failed to create HTTP client: {}", e))
                })?;
                Arc::new(client) as Arc<dyn HttpTransport>
            }
        };

        Ok(Self {
            credentials: config.credentials,
            base_url: config.base_url,
            timeout: config.timeout,
            transport,
        })
    }

    /// Get the gateway root URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the terminal key requests are sent with
    pub fn terminal_key(&self) -> &str {
        self.credentials.terminal_key()
    }

    /// Get the default per-call timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Override the gateway root URL
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;
        self.base_url = base_url;
        Ok(())
    }

    /// Fill in the terminal key and token of a request
    ///
    /// The token covers the request's signable fields plus `TerminalKey`
    /// and `Password`. The password itself never enters the request.
    pub fn sign_request<R: SignedRequest>(&self, request: &mut R) {
        request.set_terminal_key(self.credentials.terminal_key());

        let token = sign_fields(
            request.token_values(),
            self.credentials.terminal_key(),
            self.credentials.password(),
        );
        request.set_token(token);
    }

    /// Sign and post a request with the client's default deadline
    pub async fn post_request<R: SignedRequest>(
        &self,
        path: &str,
        request: &mut R,
    ) -> Result<Response> {
        self.post_request_with_context(&RequestContext::default(), path, request)
            .await
    }

    /// Sign and post a request, returning the live response on success
    ///
    /// Only 200, 201 and 204 count as success. Any other status drains the
    /// body into an [`AcquiringError::Status`]. The context deadline covers
    /// both obtaining the status and draining a failure body.
    pub async fn post_request_with_context<R: SignedRequest>(
        &self,
        ctx: &RequestContext,
        path: &str,
        request: &mut R,
    ) -> Result<Response> {
        let deadline = self.deadline(ctx);
        self.dispatch(deadline, path, request).await
    }

    /// Decode a JSON response body into `T`
    pub async fn decode_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(AcquiringError::Decode)
    }

    /// Post a request, decode the response and surface business failures
    ///
    /// One deadline covers sending, reading and decoding. On a business
    /// failure only the [`AcquiringError::Api`] fields survive; callers
    /// that need the rest of the payload should pair
    /// [`post_request_with_context`](Self::post_request_with_context) with
    /// [`decode_response`](Self::decode_response) and inspect
    /// [`ApiResponse::error`] themselves.
    pub async fn call<R, T>(&self, ctx: &RequestContext, path: &str, request: &mut R) -> Result<T>
    where
        R: SignedRequest,
        T: DeserializeOwned + ApiResponse,
    {
        let deadline = self.deadline(ctx);
        let response = self.dispatch(deadline, path, request).await?;
        let decoded: T = within(deadline, self.decode_response(response)).await?;
        decoded.error()?;
        Ok(decoded)
    }

    /// Absolute deadline for a call starting now
    fn deadline(&self, ctx: &RequestContext) -> Option<Instant> {
        ctx.timeout
            .or(self.timeout)
            .map(|timeout| Instant::now() + timeout)
    }

    async fn dispatch<R: SignedRequest>(
        &self,
        deadline: Option<Instant>,
        path: &str,
        request: &mut R,
    ) -> Result<Response> {
        self.sign_request(request);
        let body = serde_json::to_vec(&*request).map_err(AcquiringError::Encode)?;

        let url = format!("{}{}", self.base_url, path);
        let url = Url::parse(&url)
            .map_err(|e| AcquiringError::config(format!("Invalid request URL {}: {}", url, e)))?;

        let mut http_request = Request::new(Method::POST, url);
        http_request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *http_request.body_mut() = Some(body.into());

        tracing::debug!("Sending request to: {}{}", self.base_url, path);

        let response = within(deadline, async {
            Ok(self.transport.execute(http_request).await?)
        })
        .await?;

        let status = response.status();
        tracing::debug!("Response from {} with status: {}", path, status);

        if !is_success_status(status) {
            let body = within(deadline, async { Ok(response.text().await?) }).await?;
            tracing::debug!(
                "Request to {} failed with status: {}, {} bytes of body",
                path,
                status,
                body.len()
            );
            return Err(AcquiringError::status(status.as_u16(), body));
        }

        Ok(response)
    }
}

/// Run `future` until `deadline`, mapping expiry to [`AcquiringError::Timeout`]
async fn within<T, F>(deadline: Option<Instant>, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match deadline {
        Some(deadline) => timeout_at(deadline, future)
            .await
            .map_err(|_| AcquiringError::Timeout)?,
        None => future.await,
    }
}

fn is_success_status(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED || status == StatusCode::NO_CONTENT
}
