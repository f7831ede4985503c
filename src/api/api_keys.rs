use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateApiKey {
    pub name: String,
    /// `full_access` or `sending_access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Restricts a sending key to one domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    client: &'a Client,
}

impl<'a> ApiKeys<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// The returned `token` is only ever shown once.
    pub async fn create(&self, params: &CreateApiKey) -> Result<Response> {
        self.client.post("api-keys", params).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("api-keys", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, api_key_id: &str) -> Result<Response> {
        let id = require(api_key_id, "api_key_id")?;
        self.client.delete(&format!("api-keys/{id}")).await
    }
}
