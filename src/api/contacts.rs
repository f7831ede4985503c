use super::require;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use serde::Serialize;
use serde_json::{Map, Value};

/// Creates a contact globally, or inside an audience when `audience_id` is set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateContact {
    #[serde(skip)]
    pub audience_id: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
    /// Custom contact properties. Not accepted by the audience endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

/// Updates a contact addressed by `id` or, failing that, `email`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContact {
    #[serde(skip)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip)]
    pub audience_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSubscription {
    pub id: String,
    /// `opt_in` or `opt_out`.
    pub subscription: String,
}

fn contact_path(audience_id: Option<&str>, contact: &str) -> String {
    match audience_id.filter(|a| !a.is_empty()) {
        Some(audience_id) => format!("audiences/{audience_id}/contacts/{contact}"),
        None => format!("contacts/{contact}"),
    }
}

fn missing_identifier() -> Error {
    Error::invalid_argument("Missing `id` or `email` field")
}

#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a Client,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn segments(&self) -> ContactSegments<'a> {
        ContactSegments {
            client: self.client,
        }
    }

    pub fn topics(&self) -> ContactTopics<'a> {
        ContactTopics {
            client: self.client,
        }
    }

    pub async fn create(&self, params: &CreateContact) -> Result<Response> {
        match params.audience_id.as_deref().filter(|a| !a.is_empty()) {
            Some(audience_id) => {
                let payload = CreateContact {
                    properties: None,
                    ..params.clone()
                };
                self.client
                    .post(&format!("audiences/{audience_id}/contacts"), &payload)
                    .await
            }
            None => self.client.post("contacts", params).await,
        }
    }

    /// `contact` is either the contact id or its email address.
    pub async fn get(&self, contact: &str, audience_id: Option<&str>) -> Result<Response> {
        if contact.is_empty() {
            return Err(missing_identifier());
        }
        self.client.get(&contact_path(audience_id, contact)).await
    }

    pub async fn list(&self, audience_id: Option<&str>, params: &ListParams) -> Result<Response> {
        let base = match audience_id.filter(|a| !a.is_empty()) {
            Some(audience_id) => format!("audiences/{audience_id}/contacts"),
            None => "contacts".to_string(),
        };
        let path = paginated_path(&base, params)?;
        self.client.get(&path).await
    }

    pub async fn update(&self, params: &UpdateContact) -> Result<Response> {
        let contact = params
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| params.email.as_deref().filter(|e| !e.is_empty()))
            .ok_or_else(missing_identifier)?;
        let path = contact_path(params.audience_id.as_deref(), contact);

        if params.audience_id.as_deref().map_or(false, |a| !a.is_empty()) {
            let payload = UpdateContact {
                properties: None,
                ..params.clone()
            };
            self.client.patch(&path, &payload).await
        } else {
            self.client.patch(&path, params).await
        }
    }

    pub async fn remove(&self, contact: &str, audience_id: Option<&str>) -> Result<Response> {
        if contact.is_empty() {
            return Err(missing_identifier());
        }
        self.client.delete(&contact_path(audience_id, contact)).await
    }
}

/// Segment membership of a single contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactSegments<'a> {
    client: &'a Client,
}

impl<'a> ContactSegments<'a> {
    pub async fn list(&self, contact: &str, params: &ListParams) -> Result<Response> {
        let contact = require(contact, "contact_id or email")?;
        let path = paginated_path(&format!("contacts/{contact}/segments"), params)?;
        self.client.get(&path).await
    }

    pub async fn add(&self, contact: &str, segment_id: &str) -> Result<Response> {
        let contact = require(contact, "contact_id or email")?;
        let segment_id = require(segment_id, "segment_id")?;
        self.client
            .post_empty(&format!("contacts/{contact}/segments/{segment_id}"))
            .await
    }

    pub async fn remove(&self, contact: &str, segment_id: &str) -> Result<Response> {
        let contact = require(contact, "contact_id or email")?;
        let segment_id = require(segment_id, "segment_id")?;
        self.client
            .delete(&format!("contacts/{contact}/segments/{segment_id}"))
            .await
    }
}

/// Topic subscriptions of a single contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactTopics<'a> {
    client: &'a Client,
}

impl<'a> ContactTopics<'a> {
    pub async fn list(&self, contact: &str, params: &ListParams) -> Result<Response> {
        let contact = require(contact, "contact_id or email")?;
        let path = paginated_path(&format!("contacts/{contact}/topics"), params)?;
        self.client.get(&path).await
    }

    pub async fn update(&self, contact: &str, topics: &[TopicSubscription]) -> Result<Response> {
        let contact = require(contact, "contact_id or email")?;
        if topics.is_empty() {
            return Err(Error::invalid_argument("topics is required"));
        }
        self.client
            .patch(&format!("contacts/{contact}/topics"), topics)
            .await
    }
}
