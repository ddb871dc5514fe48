use hyperswitch_masking::Secret;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Connectors {
    pub evonet: ConnectorParams,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConnectorParams {
    /// base url
    #[serde(default)]
    pub base_url: String,
    /// Left empty to run in demo mode.
    #[serde(default)]
    pub key_id: Secret<String>,
    #[serde(default)]
    pub sign_key: Secret<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    pub bypass_proxy_urls: Vec<String>,
}

impl Proxy {
    pub fn is_proxy_configured(&self, should_bypass_proxy: bool) -> bool {
        !should_bypass_proxy && (self.http_url.is_some() || self.https_url.is_some())
    }
}
