use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use crate::contract::icontentbackend::{FindGlobalRequest, IContentBackend};
use crate::contract::lib::{BackendError, Error};
use crate::utils::config::Settings;

pub struct HttpContentBackendConnectionDetails {
    pub base_url: String,
    pub api_prefix: String,
    pub api_key: Option<String>,
    pub auth_collection: String,
    pub timeout: Duration,
}

impl From<&Settings> for HttpContentBackendConnectionDetails {
    fn from(settings: &Settings) -> Self {
        HttpContentBackendConnectionDetails {
            base_url: settings.base_url.clone(),
            api_prefix: settings.api_prefix.clone(),
            api_key: settings.api_key.clone(),
            auth_collection: settings.auth_collection.clone(),
            timeout: settings.timeout,
        }
    }
}

/// Reads globals over the backend's REST api.
pub struct HttpContentBackend {
    config: HttpContentBackendConnectionDetails,
    client: reqwest::Client,
}

impl HttpContentBackend {
    pub fn new(config: HttpContentBackendConnectionDetails) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("{} API-Key {}", config.auth_collection, key))
                .map_err(Error::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClientBuildError)?;

        Ok(HttpContentBackend { config, client })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Self::new(settings.into())
    }

    fn global_url(&self, request: &FindGlobalRequest) -> Result<reqwest::Url, BackendError> {
        let mut base = self.config.base_url.trim_end_matches('/').to_string();
        let prefix = self.config.api_prefix.trim_matches('/');
        if !prefix.is_empty() {
            base.push('/');
            base.push_str(prefix);
        }
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", base, e)))?;

        // The slug is a single segment, reserved characters included.
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(format!("{} cannot be a base url", base)))?
            .pop_if_empty()
            .push("globals")
            .push(&request.slug);

        let params = request.query_params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }
}

#[async_trait]
impl IContentBackend for HttpContentBackend {
    async fn find_global(&self, request: &FindGlobalRequest) -> Result<Option<Value>, BackendError> {
        let url = self.global_url(request)?;

        let response = self.client
            .get(url.clone())
            .send()
            .await
            .map_err(BackendError::Network)?;

        let status_code = response.status();

        let res_txt = response.text().await.map_err(BackendError::Network)?;

        if !status_code.is_success() {
            debug!("Content backend responded with error Url: {}, Response: {}, StatusCode: {}", url.as_str(), res_txt, status_code.as_str());
            if status_code == StatusCode::NOT_FOUND {
                return Err(BackendError::NotFound(request.slug.clone()));
            }
            if status_code.is_server_error() {
                return Err(BackendError::Server { status: status_code.as_u16(), body: res_txt });
            }
            return Err(BackendError::Client { status: status_code.as_u16(), body: res_txt });
        }

        if res_txt.trim().is_empty() {
            return Ok(None);
        }

        let document: Value = serde_json::from_str(&res_txt).map_err(BackendError::Decode)?;
        match document {
            Value::Null => Ok(None),
            document => Ok(Some(document)),
        }
    }
}
