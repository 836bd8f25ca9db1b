//! HTTP Resource Gateway

use platform::http::ApiClient;
use serde::{Deserialize, Serialize};

use crate::domain::query::Query;
use crate::domain::repository::{Resource, ResourceGateway};
use crate::error::MarketplaceResult;

/// Responses come wrapped in `{"data": ..}`; bare bodies are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } | Envelope::Bare(data) => data,
        }
    }
}

/// Gateway backed by the shared [`ApiClient`]
#[derive(Debug, Clone)]
pub struct HttpResourceGateway {
    client: ApiClient,
}

impl HttpResourceGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl ResourceGateway for HttpResourceGateway {
    async fn search<R: Resource>(&self, query: &Query) -> MarketplaceResult<Vec<R>> {
        let owned = query.query_pairs();
        let pairs: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let path = format!("/{}/search", R::PATH);

        let page: Envelope<Vec<R>> = self.client.post_json(&path, &pairs, query).await?;
        let records = page.into_inner();
        tracing::debug!(resource = R::PATH, count = records.len(), "Search returned");
        Ok(records)
    }

    async fn create<R, B>(&self, body: &B) -> MarketplaceResult<R>
    where
        R: Resource,
        B: Serialize + Sync,
    {
        let path = format!("/{}", R::PATH);
        let created: Envelope<R> = self.client.post_json(&path, &[], body).await?;
        tracing::info!(resource = R::PATH, "Created record");
        Ok(created.into_inner())
    }

    async fn update<R, B>(&self, id: R::Id, body: &B) -> MarketplaceResult<R>
    where
        R: Resource,
        B: Serialize + Sync,
    {
        let path = format!("/{}/{id}", R::PATH);
        let updated: Envelope<R> = self.client.patch_json(&path, body).await?;
        tracing::info!(resource = R::PATH, %id, "Updated record");
        Ok(updated.into_inner())
    }

    async fn destroy<R: Resource>(&self, id: R::Id, force: bool) -> MarketplaceResult<()> {
        let path = format!("/{}/{id}", R::PATH);
        let force = if force { "true" } else { "false" };
        self.client.delete(&path, &[("force", force)]).await?;
        tracing::info!(resource = R::PATH, %id, force, "Deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HttpResourceGateway;
    use crate::domain::entities::{Bid, Category, ServiceRequest};
    use crate::domain::query::Query;
    use crate::domain::repository::{Resource, ResourceGateway};
    use kernel::id::{BidId, RequestId};
    use platform::credential::{BearerToken, Credential};
    use platform::http::ApiClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn gateway(server: &MockServer) -> HttpResourceGateway {
        let credential = Credential::new();
        credential.set(Some(BearerToken::new("1|abc"))).await;
        HttpResourceGateway::new(ApiClient::new(server.uri(), credential))
    }

    #[tokio::test]
    async fn test_search_posts_body_and_include() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/categories/search"))
            .and(query_param("include", "category"))
            .and(header("authorization", "Bearer 1|abc"))
            .and(body_json(json!({
                "filters": [{"field": "status", "operator": "=", "value": 1}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1, "name": "Hogar", "slug": "hogar", "status": 1}],
                "meta": {"current_page": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = Query::new().where_eq("status", 1).with(["category"]);
        let found: Vec<Category> = gateway(&server).await.search(&query).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Hogar");
    }

    #[tokio::test]
    async fn test_update_accepts_bare_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/bids/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5, "user_id": 8, "request_id": 12, "offer": 30, "status": "pending"
            })))
            .mount(&server)
            .await;

        let bid: Bid = gateway(&server)
            .await
            .update(BidId::new(5), &json!({"offer": 30}))
            .await
            .unwrap();
        assert_eq!(bid.id, BidId::new(5));
    }

    #[tokio::test]
    async fn test_destroy_force_flag() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/bids/5"))
            .and(query_param("force", "false"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        gateway(&server)
            .await
            .destroy::<Bid>(BidId::new(5), false)
            .await
            .unwrap();
    }

    async fn remove<G, R>(gateway: &G, id: R::Id) -> crate::MarketplaceResult<()>
    where
        G: ResourceGateway,
        R: Resource,
    {
        gateway.destroy::<R>(id, true).await
    }

    fn spawnable<F: std::future::Future + Send>(future: F) -> F {
        future
    }

    #[tokio::test]
    async fn test_destroy_through_generic_port() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/requests/9"))
            .and(query_param("force", "true"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server).await;
        spawnable(remove::<_, ServiceRequest>(&gateway, RequestId::new(9)))
            .await
            .unwrap();
    }
}
