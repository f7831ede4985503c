use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAudience {
    pub name: String,
}

/// Audiences are superseded by segments but still served by the API.
#[derive(Debug, Clone, Copy)]
pub struct Audiences<'a> {
    client: &'a Client,
}

impl<'a> Audiences<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateAudience) -> Result<Response> {
        self.client.post("audiences", params).await
    }

    pub async fn get(&self, audience_id: &str) -> Result<Response> {
        let id = require(audience_id, "audience_id")?;
        self.client.get(&format!("audiences/{id}")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("audiences", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, audience_id: &str) -> Result<Response> {
        let id = require(audience_id, "audience_id")?;
        self.client.delete(&format!("audiences/{id}")).await
    }
}
