//! Accept Bid Use Case
//!
//! Accepting an offer takes three writes, in this order:
//! 1. `POST /orders` with the computed totals and the payment metadata
//! 2. `PATCH /bids/{id}` marking the bid accepted
//! 3. `PATCH /requests/{id}` assigning the supplier and moving it in progress
//!
//! The first failure stops the sequence; earlier writes are not undone.

use kernel::id::{BidId, RequestId, UserId};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::application::bids::BidChangeBody;
use crate::application::config::MarketplaceConfig;
use crate::domain::entities::{Bid, Order, ServiceRequest};
use crate::domain::repository::ResourceGateway;
use crate::domain::services::OrderTotals;
use crate::domain::value_objects::{BidStatus, RequestStatus};
use crate::error::MarketplaceResult;

#[derive(Serialize)]
struct OrderBody {
    user_id: UserId,
    supplier_id: UserId,
    request_id: RequestId,
    bid_id: BidId,
    #[serde(flatten)]
    totals: OrderTotals,
    /// Payment provider payload, stored verbatim as a JSON string
    metadata: String,
}

#[derive(Serialize)]
struct AssignSupplierBody {
    supplier_id: UserId,
    status: RequestStatus,
}

/// Records written by a successful acceptance
#[derive(Debug, Clone)]
pub struct AcceptedBid {
    pub order: Order,
    pub bid: Bid,
    pub request: ServiceRequest,
}

pub struct AcceptBidUseCase<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
    config: Arc<MarketplaceConfig>,
}

impl<G> AcceptBidUseCase<G>
where
    G: ResourceGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<MarketplaceConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(
        &self,
        client_id: UserId,
        bid: &Bid,
        payment_metadata: &Value,
    ) -> MarketplaceResult<AcceptedBid> {
        let totals = OrderTotals::from_subtotal(bid.offer, self.config.tax_rate);

        let order: Order = self
            .gateway
            .create(&OrderBody {
                user_id: client_id,
                supplier_id: bid.user_id,
                request_id: bid.request_id,
                bid_id: bid.id,
                totals,
                metadata: payment_metadata.to_string(),
            })
            .await?;
        tracing::info!(order_id = %order.id, total = %totals.total, "Order created");

        let accepted: Bid = self
            .gateway
            .update(
                bid.id,
                &BidChangeBody {
                    offer: bid.offer,
                    description: &bid.description,
                    status: Some(BidStatus::Accepted),
                },
            )
            .await?;

        let request: ServiceRequest = self
            .gateway
            .update(
                bid.request_id,
                &AssignSupplierBody {
                    supplier_id: bid.user_id,
                    status: RequestStatus::InProgress,
                },
            )
            .await?;
        tracing::info!(bid_id = %bid.id, request_id = %bid.request_id, "Bid accepted");

        Ok(AcceptedBid {
            order,
            bid: accepted,
            request,
        })
    }
}
