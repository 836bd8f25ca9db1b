//! Catalogue Use Case

use kernel::id::{CategoryId, UserId};
use std::sync::Arc;

use crate::domain::entities::{Category, Service};
use crate::domain::query::Query;
use crate::domain::repository::ResourceGateway;
use crate::error::MarketplaceResult;

/// Categories and the services inside them
pub struct CatalogueUseCase<G>
where
    G: ResourceGateway,
{
    gateway: Arc<G>,
}

impl<G> CatalogueUseCase<G>
where
    G: ResourceGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Enabled categories
    pub async fn active_categories(&self) -> MarketplaceResult<Vec<Category>> {
        let query = Query::new().where_eq("status", 1);
        self.gateway.search(&query).await
    }

    /// Enabled categories a supplier registered under
    pub async fn supplier_categories(&self, user_id: UserId) -> MarketplaceResult<Vec<Category>> {
        let query = Query::new()
            .where_eq("status", 1)
            .scope("supplier", [user_id.get()])
            .with(["category"]);
        self.gateway.search(&query).await
    }

    pub async fn services_in_category(
        &self,
        category_id: CategoryId,
    ) -> MarketplaceResult<Vec<Service>> {
        let query = Query::new().where_eq("category_id", category_id.get());
        self.gateway.search(&query).await
    }
}
