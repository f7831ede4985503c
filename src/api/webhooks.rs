use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

/// The response carries the `signing_secret` used to verify deliveries
/// (see [`crate::webhook`]).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWebhook {
    pub endpoint: String,
    /// Event types such as `email.sent` or `email.bounced`.
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebhook {
    #[serde(skip)]
    pub webhook_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Management of webhook endpoints registered with Resend.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateWebhook) -> Result<Response> {
        self.client.post("webhooks", params).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("webhooks", params)?;
        self.client.get(&path).await
    }

    pub async fn get(&self, webhook_id: &str) -> Result<Response> {
        let id = require(webhook_id, "webhook_id")?;
        self.client.get(&format!("webhooks/{id}")).await
    }

    pub async fn update(&self, params: &UpdateWebhook) -> Result<Response> {
        let id = require(&params.webhook_id, "webhook_id")?;
        self.client.patch(&format!("webhooks/{id}"), params).await
    }

    pub async fn remove(&self, webhook_id: &str) -> Result<Response> {
        let id = require(webhook_id, "webhook_id")?;
        self.client.delete(&format!("webhooks/{id}")).await
    }
}
