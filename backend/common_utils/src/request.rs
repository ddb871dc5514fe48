use hyperswitch_masking::{ErasedMaskSerialize, Maskable};
use serde::{Deserialize, Serialize};

pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

#[derive(Serialize)]
pub enum RequestContent {
    Json(Box<dyn ErasedMaskSerialize + Send>),
}

impl RequestContent {
    /// Body with every secret field replaced by its mask, safe to log.
    pub fn masked_value(&self) -> serde_json::Value {
        match self {
            Self::Json(body) => (**body).masked_serialize().unwrap_or_else(
                |_| serde_json::json!({ "error": "failed to mask serialize connector request" }),
            ),
        }
    }
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Header values with masked entries hidden, safe to log.
    pub fn get_masked_headers(&self) -> serde_json::Value {
        let masked = self
            .headers
            .iter()
            .fold(serde_json::Map::new(), |mut acc, (key, value)| {
                let value = match value {
                    Maskable::Masked(_) => "*** alloc::string::String ***".to_string(),
                    Maskable::Normal(value) => value.to_owned(),
                };
                acc.insert(key.clone(), serde_json::Value::String(value));
                acc
            });
        serde_json::Value::Object(masked)
    }

    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_optional_body<T: Into<RequestContent>>(mut self, body: Option<T>) -> Self {
        body.map(|body| self.body.replace(body.into()));
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
