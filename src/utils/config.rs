use std::env;
use std::time::Duration;
use config::{Config, Environment, File};
use serde::Deserialize;
use crate::contract::icontentbackend::FindGlobalRequest;
use crate::contract::lib::{Error, Result};

pub static CONFIG_PATH_ENV: &str = "SITE_GLOBALS_CONFIG";
pub static ENV_PREFIX: &str = "SITE_GLOBALS";
static DEFAULT_CONFIG_FILE: &str = "site-globals";

#[derive(Debug, Deserialize)]
struct RawSettings {
    base_url: String,
    api_prefix: String,
    api_key: Option<String>,
    auth_collection: String,
    timeout: String,
    depth: Option<u32>,
    locale: Option<String>,
    draft: bool,
}

/// Connection and query settings for the content backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub api_prefix: String,
    pub api_key: Option<String>,
    /// Auth-enabled collection the api key belongs to.
    pub auth_collection: String,
    pub timeout: Duration,
    pub depth: Option<u32>,
    pub locale: Option<String>,
    pub draft: bool,
}

impl Settings {
    /// Loads settings from defaults, an optional config file and `SITE_GLOBALS_*` variables.
    ///
    /// The file is taken from `SITE_GLOBALS_CONFIG` when set, otherwise
    /// `site-globals.{toml,yaml,json}` in the working directory is used if present.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(path.as_deref())
    }

    pub fn load_from(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let raw: RawSettings = Config::builder()
            .set_default("api_prefix", "/api").map_err(Error::ConfigError)?
            .set_default("auth_collection", "users").map_err(Error::ConfigError)?
            .set_default("timeout", "5s").map_err(Error::ConfigError)?
            .set_default("draft", false).map_err(Error::ConfigError)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(Error::ConfigError)?;

        Self::try_from(raw)
    }

    /// Request for `slug` carrying the configured query defaults.
    pub fn request_for(&self, slug: &str) -> FindGlobalRequest {
        FindGlobalRequest {
            slug: slug.to_string(),
            depth: self.depth,
            locale: self.locale.clone(),
            fallback_locale: None,
            draft: self.draft.then_some(true),
        }
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = Error;

    fn try_from(raw: RawSettings) -> Result<Self> {
        let timeout = humantime::parse_duration(&raw.timeout).map_err(|e| Error::InvalidTimeout {
            value: raw.timeout.clone(),
            source: e,
        })?;

        Ok(Settings {
            base_url: raw.base_url.trim_end_matches('/').to_string(),
            api_prefix: raw.api_prefix,
            api_key: raw.api_key.filter(|k| !k.is_empty()),
            auth_collection: raw.auth_collection,
            timeout,
            depth: raw.depth,
            locale: raw.locale,
            draft: raw.draft,
        })
    }
}
