//! Thin wrappers over the Resend REST resources.
//!
//! Each wrapper borrows the [`Client`](crate::Client), builds the resource
//! path, serializes the typed parameters and hands them to the client.

mod api_keys;
mod audiences;
mod batch;
mod broadcasts;
mod contact_properties;
mod contacts;
mod domains;
mod emails;
mod segments;
mod templates;
mod topics;
mod webhooks;

pub use api_keys::{ApiKeys, CreateApiKey};
pub use audiences::{Audiences, CreateAudience};
pub use batch::Batch;
pub use broadcasts::{Broadcasts, CreateBroadcast, SendBroadcast, UpdateBroadcast};
pub use contact_properties::{ContactProperties, CreateContactProperty, UpdateContactProperty};
pub use contacts::{
    ContactSegments, ContactTopics, Contacts, CreateContact, TopicSubscription, UpdateContact,
};
pub use domains::{CreateDomain, Domains, UpdateDomain};
pub use emails::{
    Attachment, Emails, ReceivedAttachments, ReceivedEmails, SendEmail, Tag, TemplateRef,
    UpdateEmail,
};
pub use segments::{CreateSegment, Segments};
pub use templates::{CreateTemplate, Templates, TemplateVariable, UpdateTemplate};
pub use topics::{CreateTopic, Topics, UpdateTopic};
pub use webhooks::{CreateWebhook, UpdateWebhook, Webhooks};

use crate::error::{Error, Result};

/// Returns `value` if non-empty, otherwise an `InvalidArgument` naming `field`.
pub(crate) fn require<'v>(value: &'v str, field: &str) -> Result<&'v str> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{field} is required")));
    }
    Ok(value)
}
