//! Opinion Use Cases
//!
//! Clients rate the supplier who did the job; suppliers rate the client when
//! they finish it. Both directions are stored as opinions keyed by request.

use kernel::id::{RequestId, UserId};
use serde::Serialize;
use std::sync::Arc;

use crate::application::bids::BidsUseCase;
use crate::application::requests::RequestsUseCase;
use crate::domain::entities::{Opinion, ServiceRequest};
use crate::domain::query::Query;
use crate::domain::repository::ResourceGateway;
use crate::domain::services::is_valid_rating;
use crate::error::{MarketplaceError, MarketplaceResult};

/// Input for a new rating
#[derive(Debug, Clone)]
pub struct NewOpinion {
    /// Author
    pub user_id: UserId,
    /// Rated party
    pub supplier_id: UserId,
    pub request_id: RequestId,
    pub comment: String,
    /// 1 to 5
    pub rating: u8,
}

#[derive(Serialize)]
struct OpinionBody<'a> {
    user_id: UserId,
    supplier_id: UserId,
    request_id: RequestId,
    comment: &'a str,
    rating: u8,
    status: bool,
}

pub struct OpinionsUseCase<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> OpinionsUseCase<G>
where
    G: ResourceGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn rate_supplier(&self, input: &NewOpinion) -> MarketplaceResult<Opinion> {
        ensure_rating(input.rating)?;
        let body = OpinionBody {
            user_id: input.user_id,
            supplier_id: input.supplier_id,
            request_id: input.request_id,
            comment: input.comment.trim(),
            rating: input.rating,
            status: true,
        };
        let opinion: Opinion = self.gateway.create(&body).await?;
        tracing::info!(opinion_id = %opinion.id, request_id = %input.request_id, "Opinion recorded");
        Ok(opinion)
    }

    /// Ratings received by a supplier, with their authors
    pub async fn opinions_for_supplier(&self, supplier_id: UserId) -> MarketplaceResult<Vec<Opinion>> {
        let query = Query::new()
            .where_eq("supplier_id", supplier_id.get())
            .with(["user"]);
        self.gateway.search(&query).await
    }

    /// The rating a user left on a request, if any
    pub async fn opinion_for_request(
        &self,
        user_id: UserId,
        request_id: RequestId,
    ) -> MarketplaceResult<Option<Opinion>> {
        let query = Query::new()
            .where_eq("user_id", user_id.get())
            .where_eq("request_id", request_id.get());
        let opinions: Vec<Opinion> = self.gateway.search(&query).await?;
        Ok(opinions.into_iter().next())
    }

    /// Client rates whoever holds the accepted bid on the request
    pub async fn rate_accepted_supplier(
        &self,
        user_id: UserId,
        request_id: RequestId,
        comment: &str,
        rating: u8,
    ) -> MarketplaceResult<Opinion> {
        ensure_rating(rating)?;
        let bid = BidsUseCase::new(self.gateway.clone())
            .accepted_bid_for_request(request_id)
            .await?
            .ok_or_else(|| {
                MarketplaceError::NotFound(format!("accepted bid for request {request_id}"))
            })?;

        self.rate_supplier(&NewOpinion {
            user_id,
            supplier_id: bid.user_id,
            request_id,
            comment: comment.to_string(),
            rating,
        })
        .await
    }

    /// Supplier completes the request, then rates the client who made it
    pub async fn finish_and_rate_client(
        &self,
        supplier_id: UserId,
        request: &ServiceRequest,
        comment: &str,
        rating: u8,
    ) -> MarketplaceResult<Opinion> {
        ensure_rating(rating)?;
        RequestsUseCase::new(self.gateway.clone())
            .complete_request(request.id, comment)
            .await?;

        self.rate_supplier(&NewOpinion {
            user_id: supplier_id,
            supplier_id: request.user_id,
            request_id: request.id,
            comment: comment.to_string(),
            rating,
        })
        .await
    }
}

fn ensure_rating(rating: u8) -> MarketplaceResult<()> {
    if !is_valid_rating(rating) {
        return Err(MarketplaceError::InvalidInput(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }
    Ok(())
}
