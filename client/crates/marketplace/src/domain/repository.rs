//! Resource Gateway Trait
//!
//! Interface to the backend's resource API. Implementation is in the infra
//! layer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;

use crate::domain::query::Query;
use crate::error::MarketplaceResult;

/// A record type served under `/{PATH}`
pub trait Resource: DeserializeOwned + Send + 'static {
    const PATH: &'static str;
    type Id: fmt::Display + Copy + Send + Sync;
}

/// Port to the resource API
///
/// Futures are spelled out as `Send` by hand: `destroy` names `R` only through
/// `R::Id`, so a forwarding impl could not infer it.
pub trait ResourceGateway: Send + Sync {
    /// `POST /{resource}/search`
    fn search<R: Resource>(
        &self,
        query: &Query,
    ) -> impl Future<Output = MarketplaceResult<Vec<R>>> + Send;

    /// `POST /{resource}`
    fn create<R, B>(&self, body: &B) -> impl Future<Output = MarketplaceResult<R>> + Send
    where
        R: Resource,
        B: Serialize + Sync;

    /// `PATCH /{resource}/{id}`
    fn update<R, B>(
        &self,
        id: R::Id,
        body: &B,
    ) -> impl Future<Output = MarketplaceResult<R>> + Send
    where
        R: Resource,
        B: Serialize + Sync;

    /// `DELETE /{resource}/{id}`; `force` skips the soft-delete
    fn destroy<R: Resource>(
        &self,
        id: R::Id,
        force: bool,
    ) -> impl Future<Output = MarketplaceResult<()>> + Send;
}
