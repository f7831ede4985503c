use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateVariable {
    pub key: String,
    /// `string` or `number`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_value: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTemplate {
    pub name: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<TemplateVariable>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    client: &'a Client,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateTemplate) -> Result<Response> {
        self.client.post("templates", params).await
    }

    /// `template_id` may also be the template alias.
    pub async fn get(&self, template_id: &str) -> Result<Response> {
        let id = require(template_id, "template_id")?;
        self.client.get(&format!("templates/{id}")).await
    }

    pub async fn update(&self, template_id: &str, params: &UpdateTemplate) -> Result<Response> {
        let id = require(template_id, "template_id")?;
        self.client.patch(&format!("templates/{id}"), params).await
    }

    pub async fn publish(&self, template_id: &str) -> Result<Response> {
        let id = require(template_id, "template_id")?;
        self.client
            .post_empty(&format!("templates/{id}/publish"))
            .await
    }

    pub async fn duplicate(&self, template_id: &str) -> Result<Response> {
        let id = require(template_id, "template_id")?;
        self.client
            .post_empty(&format!("templates/{id}/duplicate"))
            .await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("templates", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, template_id: &str) -> Result<Response> {
        let id = require(template_id, "template_id")?;
        self.client.delete(&format!("templates/{id}")).await
    }
}
