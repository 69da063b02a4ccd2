//! PostgREST-dialect HTTP implementation of [`TaskStore`].
//!
//! Speaks the hosted backend's REST interface against a single logical
//! table: `?id=eq.N` filters, `order=created_at.asc`, and a single-object
//! insert response requested via the `Prefer`/`Accept` headers. One
//! request per operation; no retry, timeout, or cancellation.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde_json::json;

use super::TaskStore;
use crate::config::BackendConfig;
use crate::error::{RequestFailed, StoreResult};
use crate::types::{NewTask, Task, TaskId};

/// The logical table all four operations target.
const TABLE: &str = "task";

/// Accept value asking the backend for a bare object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Build a store from the backend section of the config. The api key
    /// is sent as both `apikey` and bearer token on every request.
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// URL targeting the whole table.
    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, TABLE)
    }

    /// URL targeting the row with the given id.
    fn row_url(&self, id: TaskId) -> String {
        format!("{}/{}?id=eq.{}", self.base_url, TABLE, id)
    }

    /// URL for the ordered full-table select.
    fn list_url(&self) -> String {
        format!("{}/{}?select=*&order=created_at.asc", self.base_url, TABLE)
    }

    /// Map a non-success response to [`RequestFailed`], preferring the
    /// backend's own error message when the body carries one.
    async fn error_from(response: Response) -> RequestFailed {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        RequestFailed::new(error_message(status, &body))
    }
}

/// Extract the `message` field of a backend error body, falling back to
/// the HTTP status line when the body is not a recognizable error object.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return message.to_string();
    }
    format!("backend returned {}", status)
}

#[async_trait]
impl TaskStore for HttpStore {
    async fn insert(&self, draft: &NewTask) -> StoreResult<Task> {
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json::<Task>().await?)
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let response = self.client.get(self.list_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json::<Vec<Task>>().await?)
    }

    async fn update_description(&self, id: TaskId, description: &str) -> StoreResult<()> {
        let response = self
            .client
            .patch(self.row_url(id))
            .json(&json!({ "description": description }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let response = self.client.delete(self.row_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }
}
