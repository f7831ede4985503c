//! Client for the Resend email API, plus verification of the webhooks Resend
//! sends back.
//!
//! ```ignore
//! use resend_client::{api::SendEmail, Client, SendOptions};
//!
//! let client = Client::from_env()?;
//! let email = SendEmail {
//!     from: "Acme <onboarding@resend.dev>".into(),
//!     to: vec!["delivered@resend.dev".into()],
//!     subject: Some("hello world".into()),
//!     text: Some("it works!".into()),
//!     ..Default::default()
//! };
//! let sent = client.emails().send(&email, &SendOptions::default()).await?;
//! println!("{:?}", sent.id());
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod response;
pub mod webhook;

pub use client::{Client, SendOptions};
pub use config::Config;
pub use error::{Error, Result};
pub use pagination::ListParams;
pub use response::Response;
pub use webhook::{VerificationError, WebhookHeaders, WebhookVerifier};
