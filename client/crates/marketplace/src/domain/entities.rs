//! Domain Entities
//!
//! Records as the backend returns them. Relations are only present when the
//! query asked for them with `with(..)`.

use chrono::{DateTime, Utc};
use kernel::id::{BidId, CategoryId, MediaId, OpinionId, OrderId, RequestId, ServiceId, UserId};
use kernel::wire::{lenient_bool, lenient_datetime, lenient_u32, null_default};
use serde::Deserialize;

use crate::domain::repository::Resource;
use crate::domain::value_objects::{BidStatus, Money, RequestStatus};

/// Public view of another user, as embedded through the `user` relation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "kernel::wire::lenient_f64")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_opinions: u32,
}

impl Member {
    /// Company name for suppliers that set one, otherwise the person's name
    pub fn display_name(&self) -> String {
        match self.company_name.as_deref().map(str::trim) {
            Some(company) if !company.is_empty() => company.to_string(),
            _ => format!("{} {}", self.name, self.last_name).trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub services_count: u32,
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    type Id = CategoryId;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub requests_count: u32,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Resource for Service {
    const PATH: &'static str = "services";
    type Id = ServiceId;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    pub id: MediaId,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
}

impl Resource for Media {
    const PATH: &'static str = "medias";
    type Id = MediaId;
}

/// A client's request for a service at an address and date
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceRequest {
    pub id: RequestId,
    pub user_id: UserId,
    #[serde(default)]
    pub service_id: Option<ServiceId>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Supplier whose bid was accepted
    #[serde(default)]
    pub supplier_id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bids_count: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub user: Option<Member>,
    #[serde(default, deserialize_with = "null_default")]
    pub media: Vec<Media>,
}

impl ServiceRequest {
    /// Service name, falling back to the category name
    pub fn title(&self) -> Option<&str> {
        self.service
            .as_ref()
            .map(|s| s.name.as_str())
            .or_else(|| self.category.as_ref().map(|c| c.name.as_str()))
    }
}

impl Resource for ServiceRequest {
    const PATH: &'static str = "requests";
    type Id = RequestId;
}

/// A supplier's offer on a request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub user_id: UserId,
    pub request_id: RequestId,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub offer: Money,
    #[serde(default)]
    pub status: BidStatus,

    #[serde(default)]
    pub user: Option<Member>,
    #[serde(default)]
    pub request: Option<Box<ServiceRequest>>,
}

impl Bid {
    pub fn is_accepted(&self) -> bool {
        self.status == BidStatus::Accepted
    }
}

impl Resource for Bid {
    const PATH: &'static str = "bids";
    type Id = BidId;
}

/// A rating left on a completed request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Opinion {
    pub id: OpinionId,
    /// Author
    pub user_id: UserId,
    /// Rated party
    #[serde(default)]
    pub supplier_id: Option<UserId>,
    pub request_id: RequestId,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub rating: u32,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub status: bool,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user: Option<Member>,
    #[serde(default)]
    pub request: Option<Box<ServiceRequest>>,
}

impl Resource for Opinion {
    const PATH: &'static str = "opinions";
    type Id = OpinionId;
}

/// Payment record created when a client accepts a bid
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub supplier_id: UserId,
    pub request_id: RequestId,
    pub bid_id: BidId,
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub metadata: Option<String>,
}

impl Resource for Order {
    const PATH: &'static str = "orders";
    type Id = OrderId;
}
