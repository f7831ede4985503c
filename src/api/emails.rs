use super::require;
use crate::client::{Client, SendOptions};
use crate::error::Result;
use crate::pagination::{paginated_path, ListParams};
use crate::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An email to send, on its own or as part of a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    /// May be left out when a template provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateRef>,
}

/// Either inline `content` (base64) or a remote `path` to fetch from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Referenced from the HTML body as `cid:<content_id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: filename.into(),
            content: Some(STANDARD.encode(bytes)),
            ..Default::default()
        }
    }

    pub fn from_path(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: Some(url.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateRef {
    /// Template id or alias.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
}

/// Reschedules an email that has not been sent yet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEmail {
    #[serde(skip)]
    pub email_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Emails<'a> {
    client: &'a Client,
}

impl<'a> Emails<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn receiving(&self) -> ReceivedEmails<'a> {
        ReceivedEmails {
            client: self.client,
        }
    }

    pub async fn send(&self, email: &SendEmail, options: &SendOptions) -> Result<Response> {
        self.client.post_with("emails", email, options).await
    }

    pub async fn get(&self, email_id: &str) -> Result<Response> {
        let id = require(email_id, "email_id")?;
        self.client.get(&format!("emails/{id}")).await
    }

    pub async fn update(&self, params: &UpdateEmail) -> Result<Response> {
        let id = require(&params.email_id, "email_id")?;
        self.client.patch(&format!("emails/{id}"), params).await
    }

    /// Cancels a scheduled email.
    pub async fn cancel(&self, email_id: &str) -> Result<Response> {
        let id = require(email_id, "email_id")?;
        self.client.post_empty(&format!("emails/{id}/cancel")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("emails", params)?;
        self.client.get(&path).await
    }
}

/// Inbound emails received on a Resend domain.
#[derive(Debug, Clone, Copy)]
pub struct ReceivedEmails<'a> {
    client: &'a Client,
}

impl<'a> ReceivedEmails<'a> {
    pub fn attachments(&self) -> ReceivedAttachments<'a> {
        ReceivedAttachments {
            client: self.client,
        }
    }

    pub async fn get(&self, email_id: &str) -> Result<Response> {
        let id = require(email_id, "email_id")?;
        self.client.get(&format!("emails/receiving/{id}")).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Response> {
        let path = paginated_path("emails/receiving", params)?;
        self.client.get(&path).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReceivedAttachments<'a> {
    client: &'a Client,
}

impl<'a> ReceivedAttachments<'a> {
    pub async fn get(&self, email_id: &str, attachment_id: &str) -> Result<Response> {
        let email_id = require(email_id, "email_id")?;
        let attachment_id = require(attachment_id, "id")?;
        self.client
            .get(&format!(
                "emails/receiving/{email_id}/attachments/{attachment_id}"
            ))
            .await
    }

    pub async fn list(&self, email_id: &str, params: &ListParams) -> Result<Response> {
        let email_id = require(email_id, "email_id")?;
        let path = paginated_path(&format!("emails/receiving/{email_id}/attachments"), params)?;
        self.client.get(&path).await
    }
}
