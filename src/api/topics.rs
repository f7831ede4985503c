use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTopic {
    pub name: String,
    /// `opt_in` or `opt_out`; applies to contacts with no explicit choice.
    pub default_subscription: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTopic {
    #[serde(skip)]
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Topics<'a> {
    client: &'a Client,
}

impl<'a> Topics<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateTopic) -> Result<Response> {
        self.client.post("topics", params).await
    }

    pub async fn get(&self, topic_id: &str) -> Result<Response> {
        let id = require(topic_id, "topic_id")?;
        self.client.get(&format!("topics/{id}")).await
    }

    pub async fn update(&self, params: &UpdateTopic) -> Result<Response> {
        let id = require(&params.topic_id, "topic_id")?;
        self.client.patch(&format!("topics/{id}"), params).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("topics", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, topic_id: &str) -> Result<Response> {
        let id = require(topic_id, "topic_id")?;
        self.client.delete(&format!("topics/{id}")).await
    }
}
