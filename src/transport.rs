//! Pluggable HTTP transport
//!
//! The client never talks to the network directly. It hands a fully built
//! [`reqwest::Request`] to an [`HttpTransport`], which lets tests substitute
//! a stub that returns canned responses.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Minimal "execute a request, get a response" capability
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a request and return the raw response
    async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error>;
}

#[async_trait]
impl HttpTransport for Client {
    async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }
}
