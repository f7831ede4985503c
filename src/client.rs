// client.rs
use crate::api::{
    ApiKeys, Audiences, Batch, Broadcasts, ContactProperties, Contacts, Domains, Emails,
    Segments, Templates, Topics, Webhooks,
};
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::response::Response;
use reqwest::{header, Method};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

const USER_AGENT: &str = concat!("resend-rust:", env!("CARGO_PKG_VERSION"));
const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Extra per-request settings for send-style calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Sent as the `Idempotency-Key` header when set and non-empty.
    pub idempotency_key: Option<String>,
}

impl SendOptions {
    pub fn idempotency_key(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::invalid_argument("API key is required"));
        }

        let mut headers = header::HeaderMap::new();
        let auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::invalid_argument("API key contains invalid characters"))?;
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("RESEND_API_KEY not set"))?;
        Self::with_base_url(api_key, &config.base_url)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::load()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(self)
    }

    pub fn audiences(&self) -> Audiences<'_> {
        Audiences::new(self)
    }

    pub fn batch(&self) -> Batch<'_> {
        Batch::new(self)
    }

    pub fn broadcasts(&self) -> Broadcasts<'_> {
        Broadcasts::new(self)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    pub fn contact_properties(&self) -> ContactProperties<'_> {
        ContactProperties::new(self)
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    pub fn emails(&self) -> Emails<'_> {
        Emails::new(self)
    }

    pub fn segments(&self) -> Segments<'_> {
        Segments::new(self)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(self)
    }

    pub fn topics(&self) -> Topics<'_> {
        Topics::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        self.execute(Method::GET, path, None, &SendOptions::default())
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(Method::DELETE, path, None, &SendOptions::default())
            .await
    }

    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.post_with(path, body, &SendOptions::default()).await
    }

    pub(crate) async fn post_with<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: &SendOptions,
    ) -> Result<Response> {
        let body = serde_json::to_value(body)?;
        self.execute(Method::POST, path, Some(body), options).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Response> {
        self.execute(Method::POST, path, None, &SendOptions::default())
            .await
    }

    pub(crate) async fn patch<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.execute(Method::PATCH, path, Some(body), &SendOptions::default())
            .await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &SendOptions,
    ) -> Result<Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url.as_str());

        if let Some(key) = options.idempotency_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(IDEMPOTENCY_KEY_HEADER, key);
        }

        // An empty object is sent without a body.
        if let Some(body) = body.filter(|b| !is_empty_object(b)) {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let text = response.text().await?;

        let data: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|_| Error::UnexpectedResponse { status })?
        };

        if let Some(err) = api_error(status, &data) {
            debug!("{} failed: {}", path, err);
            return Err(err);
        }

        Ok(Response::new(data, headers))
    }
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().map_or(false, |o| o.is_empty())
}

/// Builds the error for a failed call. The body's `statusCode` wins over the
/// HTTP status when the API includes one.
fn api_error(status: u16, data: &Value) -> Option<Error> {
    let body_status = data
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok());

    let code = match body_status {
        Some(code) if code >= 400 => code,
        _ if !(200..300).contains(&status) => status,
        _ => return None,
    };

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("request failed with status {}", code));

    Some(Error::from_status(code, message))
}
