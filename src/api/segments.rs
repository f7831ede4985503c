use super::require;
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSegment {
    pub name: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Segments<'a> {
    client: &'a Client,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateSegment) -> Result<Response> {
        self.client.post("segments", params).await
    }

    pub async fn get(&self, segment_id: &str) -> Result<Response> {
        let id = require(segment_id, "segment_id")?;
        self.client.get(&format!("segments/{id}")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("segments", params)?;
        self.client.get(&path).await
    }

    pub async fn remove(&self, segment_id: &str) -> Result<Response> {
        let id = require(segment_id, "segment_id")?;
        self.client.delete(&format!("segments/{id}")).await
    }
}
