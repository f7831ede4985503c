use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateContactProperty {
    pub key: String,
    /// `string` or `number`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContactProperty {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<Value>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactProperties<'a> {
    client: &'a Client,
}

impl<'a> ContactProperties<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateContactProperty) -> Result<Response> {
        self.client.post("contact-properties", params).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("contact-properties", params)?;
        self.client.get(&path).await
    }

    pub async fn get(&self, id: &str) -> Result<Response> {
        let id = require(id, "id")?;
        self.client.get(&format!("contact-properties/{id}")).await
    }

    /// The key and type of a property are immutable.
    pub async fn update(&self, params: &UpdateContactProperty) -> Result<Response> {
        let id = require(&params.id, "id")?;
        self.client
            .patch(&format!("contact-properties/{id}"), params)
            .await
    }

    pub async fn remove(&self, id: &str) -> Result<Response> {
        let id = require(id, "id")?;
        self.client.delete(&format!("contact-properties/{id}")).await
    }
}
