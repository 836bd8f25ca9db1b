//! Service Request Use Cases

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, RequestId, ServiceId, UserId};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::entities::ServiceRequest;
use crate::domain::query::{Direction, Operator, Query};
use crate::domain::repository::ResourceGateway;
use crate::domain::services::format_wire_datetime;
use crate::domain::value_objects::RequestStatus;
use crate::error::MarketplaceResult;

/// Input for a new service request
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub user_id: UserId,
    pub service_id: Option<ServiceId>,
    pub category_id: CategoryId,
    pub address: String,
    pub description: String,
    /// When the job should be done
    pub date: DateTime<Utc>,
}

#[derive(Serialize)]
struct CreateRequestBody<'a> {
    user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_id: Option<ServiceId>,
    category_id: CategoryId,
    address: &'a str,
    description: &'a str,
    date: String,
}

#[derive(Serialize)]
struct CompleteRequestBody<'a> {
    comment: &'a str,
    status: RequestStatus,
}

/// Requests as seen by the client that made them and the suppliers bidding
pub struct RequestsUseCase<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> RequestsUseCase<G>
where
    G: ResourceGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn create_request(&self, input: &NewServiceRequest) -> MarketplaceResult<ServiceRequest> {
        let body = CreateRequestBody {
            user_id: input.user_id,
            service_id: input.service_id,
            category_id: input.category_id,
            address: input.address.trim(),
            description: input.description.trim(),
            date: format_wire_datetime(&input.date),
        };
        self.gateway.create(&body).await
    }

    /// The client's pending requests still in the future, newest first
    pub async fn open_requests_for_client(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> MarketplaceResult<Vec<ServiceRequest>> {
        let query = Query::new()
            .where_eq("user_id", user_id.get())
            .where_eq("status", RequestStatus::Pending.code())
            .filter("date", Operator::Gt, format_wire_datetime(&now))
            .sort_by("created_at", Direction::Desc)
            .with(["service", "category"]);
        self.gateway.search(&query).await
    }

    /// Pending requests the supplier currently has an offer on
    pub async fn requests_with_active_offer(
        &self,
        user_id: UserId,
    ) -> MarketplaceResult<Vec<ServiceRequest>> {
        self.pending_with_scope("withActiveOffer", user_id).await
    }

    /// Pending requests the supplier has not bid on yet
    pub async fn requests_with_inactive_offer(
        &self,
        user_id: UserId,
    ) -> MarketplaceResult<Vec<ServiceRequest>> {
        self.pending_with_scope("withInactiveOffer", user_id).await
    }

    pub async fn cancel_request(&self, request_id: RequestId) -> MarketplaceResult<()> {
        self.gateway.destroy::<ServiceRequest>(request_id, true).await
    }

    /// Supplier marks the job as done
    pub async fn complete_request(
        &self,
        request_id: RequestId,
        comment: &str,
    ) -> MarketplaceResult<ServiceRequest> {
        let body = CompleteRequestBody {
            comment: comment.trim(),
            status: RequestStatus::Completed,
        };
        self.gateway.update(request_id, &body).await
    }

    async fn pending_with_scope(
        &self,
        scope: &str,
        user_id: UserId,
    ) -> MarketplaceResult<Vec<ServiceRequest>> {
        let query = Query::new()
            .where_eq("status", RequestStatus::Pending.code())
            .scope(scope, [user_id.get()])
            .with(["service", "category"]);
        self.gateway.search(&query).await
    }
}
