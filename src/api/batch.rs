use super::SendEmail;
use crate::client::{Client, SendOptions};
use crate::error::{Error, Result};
use crate::response::Response;

#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    client: &'a Client,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Sends up to 100 emails in one request. The response `data` holds one
    /// `{ "id": .. }` per email, in order.
    pub async fn send(&self, emails: &[SendEmail], options: &SendOptions) -> Result<Response> {
        if emails.is_empty() {
            return Err(Error::invalid_argument("at least one email is required"));
        }
        self.client.post_with("emails/batch", emails, options).await
    }
}
