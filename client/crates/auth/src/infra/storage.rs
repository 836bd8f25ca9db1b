//! Token persistence over the key-value store

use platform::credential::BearerToken;
use platform::storage::KeyValueStore;

use crate::domain::repository::TokenRepository;
use crate::error::AuthResult;

/// Keeps the bearer token under a single storage key
#[derive(Debug)]
pub struct StoredTokenRepository<S> {
    store: S,
    key: String,
}

impl<S> StoredTokenRepository<S>
where
    S: KeyValueStore + Sync,
{
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> TokenRepository for StoredTokenRepository<S>
where
    S: KeyValueStore + Sync,
{
    async fn load(&self) -> AuthResult<Option<BearerToken>> {
        let raw = self.store.get(&self.key).await?;
        Ok(raw.filter(|t| !t.trim().is_empty()).map(BearerToken::new))
    }

    async fn save(&self, token: &BearerToken) -> AuthResult<()> {
        self.store.set(&self.key, token.as_str()).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.remove(&self.key).await?;
        Ok(())
    }
}
