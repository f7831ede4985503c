use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDomain {
    pub name: String,
    /// `us-east-1`, `eu-west-1`, `sa-east-1` or `ap-northeast-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_return_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDomain {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_tracking: Option<bool>,
    /// `opportunistic` or `enforced`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateDomain) -> Result<Response> {
        self.client.post("domains", params).await
    }

    pub async fn update(&self, params: &UpdateDomain) -> Result<Response> {
        let id = require(&params.id, "domain_id")?;
        self.client.patch(&format!("domains/{id}"), params).await
    }

    pub async fn get(&self, domain_id: &str) -> Result<Response> {
        let id = require(domain_id, "domain_id")?;
        self.client.get(&format!("domains/{id}")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("domains", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, domain_id: &str) -> Result<Response> {
        let id = require(domain_id, "domain_id")?;
        self.client.delete(&format!("domains/{id}")).await
    }

    /// Starts an asynchronous DNS verification of the domain.
    pub async fn verify(&self, domain_id: &str) -> Result<Response> {
        let id = require(domain_id, "domain_id")?;
        self.client.post_empty(&format!("domains/{id}/verify")).await
    }
}
