// pagination.rs
use crate::error::{Error, Result};
use url::form_urlencoded;

pub const MAX_LIMIT: u32 = 100;

/// Cursor parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, id: impl Into<String>) -> Self {
        self.after = Some(id.into());
        self
    }

    pub fn before(mut self, id: impl Into<String>) -> Self {
        self.before = Some(id.into());
        self
    }
}

/// Appends the set parameters to `base` as a query string.
///
/// Values are form-encoded, so spaces become `+`.
pub fn paginated_path(base: &str, params: &ListParams) -> Result<String> {
    if let Some(limit) = params.limit {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(Error::invalid_argument("limit must be between 1 and 100"));
        }
    }

    let pairs = [
        ("limit", params.limit.map(|l| l.to_string())),
        ("after", params.after.clone()),
        ("before", params.before.clone()),
    ];

    let query = pairs
        .iter()
        .filter_map(|(key, value)| {
            value.as_ref().map(|v| {
                let encoded: String = form_urlencoded::byte_serialize(v.as_bytes()).collect();
                format!("{key}={encoded}")
            })
        })
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        Ok(base.to_string())
    } else {
        Ok(format!("{base}?{query}"))
    }
}
