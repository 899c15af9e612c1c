//! Typed wrappers for individual gateway operations

use super::{AcquiringClient, RequestContext};
use crate::types::endpoints;
use crate::types::{
    CancelRequest, CancelResponse, CheckOrderRequest, CheckOrderResponse, GetStateRequest,
    GetStateResponse,
};
use crate::Result;

impl AcquiringClient {
    /// Get the status of every payment made against an order
    pub async fn check_order(&self, request: &mut CheckOrderRequest) -> Result<CheckOrderResponse> {
        self.check_order_with_context(&RequestContext::default(), request)
            .await
    }

    /// [`check_order`](Self::check_order) with a per-call context
    pub async fn check_order_with_context(
        &self,
        ctx: &RequestContext,
        request: &mut CheckOrderRequest,
    ) -> Result<CheckOrderResponse> {
        self.call(ctx, endpoints::CHECK_ORDER, request).await
    }

    /// Get the current status of a payment
    pub async fn get_state(&self, request: &mut GetStateRequest) -> Result<GetStateResponse> {
        self.get_state_with_context(&RequestContext::default(), request)
            .await
    }

    /// [`get_state`](Self::get_state) with a per-call context
    pub async fn get_state_with_context(
        &self,
        ctx: &RequestContext,
        request: &mut GetStateRequest,
    ) -> Result<GetStateResponse> {
        self.call(ctx, endpoints::GET_STATE, request).await
    }

    /// Cancel or refund a payment
    pub async fn cancel(&self, request: &mut CancelRequest) -> Result<CancelResponse> {
        self.cancel_with_context(&RequestContext::default(), request)
            .await
    }

    /// [`cancel`](Self::cancel) with a per-call context
    pub async fn cancel_with_context(
        &self,
        ctx: &RequestContext,
        request: &mut CancelRequest,
    ) -> Result<CancelResponse> {
        self.call(ctx, endpoints::CANCEL, request).await
    }
}
