use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;

pub mod network;

pub const DETECT_PATH: &str = "/langs/dect";
pub const TRANSLATE_PATH: &str = "/n2mt/translate";
/// The `makeID` segment is swapped for the returned audio id to build the file URL.
pub const TTS_PATH: &str = "/tts/makeID";

fn default_base_url() -> String {
    "https://papago.naver.com/apis".to_string()
}

/// Backend location and the credentials observed in browser traffic.
///
/// `authorization` and `timestamp` are opaque and expire; they have to be
/// refreshed by hand whenever the backend starts rejecting requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PapagoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub authorization: String,
    #[serde(default)]
    pub timestamp: String,
    /// Sent after the built-in headers, in order
    #[serde(default)]
    pub extra_headers: Vec<(String, String)>,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for PapagoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            authorization: String::new(),
            timestamp: String::new(),
            extra_headers: Vec::new(),
            network: NetworkConfig::default(),
        }
    }
}

impl PapagoConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source, falling back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("PAPAGO_BASE_URL").unwrap_or_else(default_base_url);
        let authorization = var("PAPAGO_AUTHORIZATION").unwrap_or_default();
        let timestamp = var("PAPAGO_TIMESTAMP").unwrap_or_default();

        Self {
            base_url,
            authorization,
            timestamp,
            extra_headers: Vec::new(),
            network: NetworkConfig::from_vars(&var),
        }
    }

    pub fn detect_url(&self) -> String {
        self.endpoint(DETECT_PATH)
    }

    pub fn translate_url(&self) -> String {
        self.endpoint(TRANSLATE_PATH)
    }

    pub fn tts_url(&self) -> String {
        self.endpoint(TTS_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
