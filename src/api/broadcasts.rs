use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBroadcast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    /// Deprecated in favour of `segment_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<String>,
    pub from: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBroadcast {
    #[serde(skip)]
    pub broadcast_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendBroadcast {
    #[serde(skip)]
    pub broadcast_id: String,
    /// Natural language ("in 1 hour") or ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

fn warn_if_audience_only(audience_id: &Option<String>, segment_id: &Option<String>) {
    if audience_id.is_some() && segment_id.is_none() {
        warn!("Using audience_id in broadcasts is deprecated. Use segment_id instead.");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Broadcasts<'a> {
    client: &'a Client,
}

impl<'a> Broadcasts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateBroadcast) -> Result<Response> {
        warn_if_audience_only(&params.audience_id, &params.segment_id);
        self.client.post("broadcasts", params).await
    }

    /// Only draft broadcasts can be updated.
    pub async fn update(&self, params: &UpdateBroadcast) -> Result<Response> {
        warn_if_audience_only(&params.audience_id, &params.segment_id);
        let id = require(&params.broadcast_id, "broadcast_id")?;
        self.client.patch(&format!("broadcasts/{id}"), params).await
    }

    pub async fn send(&self, params: &SendBroadcast) -> Result<Response> {
        let id = require(&params.broadcast_id, "broadcast_id")?;
        self.client.post(&format!("broadcasts/{id}/send"), params).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("broadcasts", params)?;
        self.client.get(&path).await
    }

    pub async fn get(&self, broadcast_id: &str) -> Result<Response> {
        let id = require(broadcast_id, "broadcast_id")?;
        self.client.get(&format!("broadcasts/{id}")).await
    }

    pub async fn remove(&self, broadcast_id: &str) -> Result<Response> {
        let id = require(broadcast_id, "broadcast_id")?;
        self.client.delete(&format!("broadcasts/{id}")).await
    }
}
