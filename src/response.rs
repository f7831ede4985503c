// response.rs
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::ops::Index;

/// JSON body of an API response together with its headers.
///
/// Header names are stored lowercase, so `header("X-RateLimit-Remaining")`
/// and `header("x-ratelimit-remaining")` are the same lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    data: Value,
    headers: HashMap<String, String>,
}

impl Response {
    pub fn new(data: Value, headers: HashMap<String, String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self { data, headers }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The `id` field most create/get calls return.
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Deserializes the body into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }
}

impl Index<&str> for Response {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.data[key]
    }
}
