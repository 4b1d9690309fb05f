//! `[assistant]` and `[projects]` section configuration.
//!
//! API keys are never stored in the config file; each section names the
//! environment variable that holds its key.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::env;

/// `[assistant]` section - generative-AI chat and speech service.
///
/// # Example
/// ```toml
/// [assistant]
/// api_key_env = "GEMINI_API_KEY"
/// model = "gemini-2.5-flash"
/// voice = "Kore"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AssistantSection {
    /// Environment variable holding the API key.
    #[serde(default = "defaults::assistant::api_key_env")]
    #[educe(Default = defaults::assistant::api_key_env())]
    pub api_key_env: String,

    #[serde(default = "defaults::assistant::base_url")]
    #[educe(Default = defaults::assistant::base_url())]
    pub base_url: String,

    /// Chat model.
    #[serde(default = "defaults::assistant::model")]
    #[educe(Default = defaults::assistant::model())]
    pub model: String,

    /// Text-to-speech model.
    #[serde(default = "defaults::assistant::speech_model")]
    #[educe(Default = defaults::assistant::speech_model())]
    pub speech_model: String,

    /// Prebuilt voice name.
    #[serde(default = "defaults::assistant::voice")]
    #[educe(Default = defaults::assistant::voice())]
    pub voice: String,

    /// Sample rate of the PCM audio returned by the speech model.
    #[serde(default = "defaults::assistant::sample_rate")]
    #[educe(Default = defaults::assistant::sample_rate())]
    pub sample_rate: u32,
}

impl AssistantSection {
    /// Read the API key from the environment. Empty values count as missing.
    pub fn api_key(&self) -> Option<String> {
        read_key(&self.api_key_env)
    }
}

/// `[projects]` section - project-photo lookup service.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectsSection {
    #[serde(default = "defaults::projects::base_url")]
    #[educe(Default = defaults::projects::base_url())]
    pub base_url: String,

    #[serde(default = "defaults::projects::api_key_env")]
    #[educe(Default = defaults::projects::api_key_env())]
    pub api_key_env: String,

    /// Maximum number of projects requested per city.
    #[serde(default = "defaults::projects::limit")]
    #[educe(Default = defaults::projects::limit())]
    pub limit: u32,
}

impl ProjectsSection {
    pub fn api_key(&self) -> Option<String> {
        read_key(&self.api_key_env)
    }
}

fn read_key(var: &str) -> Option<String> {
    env::var(var).ok().filter(|key| !key.trim().is_empty())
}
