//! Bid Use Cases

use kernel::id::{BidId, RequestId, UserId};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::entities::Bid;
use crate::domain::query::Query;
use crate::domain::repository::ResourceGateway;
use crate::domain::value_objects::{BidStatus, Money};
use crate::error::{MarketplaceError, MarketplaceResult};

#[derive(Serialize)]
struct PlaceBidBody<'a> {
    user_id: UserId,
    request_id: RequestId,
    offer: Money,
    description: &'a str,
    status: BidStatus,
}

#[derive(Serialize)]
pub(crate) struct BidChangeBody<'a> {
    pub offer: Money,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BidStatus>,
}

/// Offers made by suppliers on service requests
pub struct BidsUseCase<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> BidsUseCase<G>
where
    G: ResourceGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn place_bid(
        &self,
        user_id: UserId,
        request_id: RequestId,
        offer: Money,
        description: &str,
    ) -> MarketplaceResult<Bid> {
        ensure_positive(offer)?;
        let body = PlaceBidBody {
            user_id,
            request_id,
            offer,
            description: description.trim(),
            status: BidStatus::Pending,
        };
        let bid: Bid = self.gateway.create(&body).await?;
        tracing::info!(bid_id = %bid.id, request_id = %request_id, "Placed bid");
        Ok(bid)
    }

    /// Change the amount and note of an existing offer
    pub async fn edit_bid(&self, bid: &Bid, offer: Money, description: &str) -> MarketplaceResult<Bid> {
        ensure_positive(offer)?;
        let body = BidChangeBody {
            offer,
            description: description.trim(),
            status: None,
        };
        self.gateway.update(bid.id, &body).await
    }

    pub async fn withdraw_bid(&self, bid_id: BidId) -> MarketplaceResult<()> {
        self.gateway.destroy::<Bid>(bid_id, true).await
    }

    /// Every offer on a request, with the bidding supplier
    pub async fn bids_for_request(&self, request_id: RequestId) -> MarketplaceResult<Vec<Bid>> {
        let query = Query::new()
            .where_eq("request_id", request_id.get())
            .with(["user", "request"]);
        self.gateway.search(&query).await
    }

    /// The supplier's own offer on a request, if any
    pub async fn my_bid_for_request(
        &self,
        user_id: UserId,
        request_id: RequestId,
    ) -> MarketplaceResult<Option<Bid>> {
        let query = Query::new()
            .where_eq("request_id", request_id.get())
            .where_eq("user_id", user_id.get())
            .with(["user"]);
        let bids: Vec<Bid> = self.gateway.search(&query).await?;
        Ok(bids.into_iter().next())
    }

    /// The offer the client accepted on a request, if any
    pub async fn accepted_bid_for_request(
        &self,
        request_id: RequestId,
    ) -> MarketplaceResult<Option<Bid>> {
        let query = Query::new()
            .where_eq("status", BidStatus::Accepted.code())
            .where_eq("request_id", request_id.get())
            .with(["user"]);
        let bids: Vec<Bid> = self.gateway.search(&query).await?;
        Ok(bids.into_iter().next())
    }
}

fn ensure_positive(offer: Money) -> MarketplaceResult<()> {
    if offer <= Money::ZERO {
        return Err(MarketplaceError::InvalidInput(format!(
            "offer must be greater than zero, got {offer}"
        )));
    }
    Ok(())
}
