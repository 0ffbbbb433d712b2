//! Asynchronous client for the items API.
//!
//! # Design
//! `ItemClient` holds a `reqwest::Client` and the injected [`ClientConfig`]
//! and carries no other state between calls. Each operation is one HTTP
//! round trip: build the request, await the full response, check the status,
//! parse the body (or discard it, for delete). Any non-2xx status and any
//! transport failure surface as the single [`TransportError`] kind. No
//! retries, no caching, no timeout — callers bound latency at the call site.

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::types::{Item, ItemDraft};

/// Stateless asynchronous client for a remote item collection.
#[derive(Debug, Clone)]
pub struct ItemClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ItemClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches all items known to the store, in the store's own order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Item>, TransportError> {
        let response = self.http.get(self.url("/items")).send().await?;
        let response = check_success(response)?;
        debug!("fetched item list");
        Ok(response.json().await?)
    }

    /// Fetches the single item with the given identifier.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Item, TransportError> {
        let response = self
            .http
            .get(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        Ok(check_success(response)?.json().await?)
    }

    /// Submits a draft for creation and returns the stored item, now carrying
    /// its store-assigned identifier.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: &ItemDraft) -> Result<Item, TransportError> {
        let response = self
            .http
            .post(self.url("/items"))
            .json(draft)
            .send()
            .await?;
        let response = check_success(response)?;
        debug!("created item");
        Ok(response.json().await?)
    }

    /// Replaces the identified item's fields with the draft's (full replace,
    /// not a merge) and returns the item as stored.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i64, draft: &ItemDraft) -> Result<Item, TransportError> {
        let response = self
            .http
            .put(self.url(&format!("/items/{id}")))
            .json(draft)
            .send()
            .await?;
        Ok(check_success(response)?.json().await?)
    }

    /// Removes the identified item. Produces no value on success.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), TransportError> {
        let response = self
            .http
            .delete(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        check_success(response)?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }
}

/// Pass the response through on any 2xx status, fail uniformly otherwise.
fn check_success(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::status(status))
    }
}
