use std::sync::Arc;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use crate::contract::icontentbackend::{FindGlobalRequest, IContentBackend};
use crate::contract::lib::{BackendError, Error, Result};
use crate::globals::footer::{Footer, FOOTER_SLUG};
use crate::utils::config::Settings;

/// Fetches one global document by slug and decodes it.
///
/// Each call goes to the backend; nothing is cached and failures are not retried.
/// Any failure is logged once and returned as [`Error::FetchFailed`].
#[derive(Clone)]
pub struct GlobalFetcher {
    backend: Arc<dyn IContentBackend>,
    request: FindGlobalRequest,
}

impl GlobalFetcher {
    pub fn new(backend: Arc<dyn IContentBackend>, slug: impl Into<String>) -> Self {
        Self::with_request(backend, FindGlobalRequest::new(slug))
    }

    pub fn with_request(backend: Arc<dyn IContentBackend>, request: FindGlobalRequest) -> Self {
        GlobalFetcher { backend, request }
    }

    pub fn slug(&self) -> &str {
        &self.request.slug
    }

    /// `Ok(None)` when the backend holds no document for the slug.
    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        debug!(slug = %self.request.slug, "Fetching global");

        let result = match self.backend.find_global(&self.request).await {
            Ok(Some(document)) => serde_json::from_value::<T>(document)
                .map(Some)
                .map_err(BackendError::Decode),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        result.map_err(|source| {
            error!(slug = %self.request.slug, error = %source, "Error fetching global");
            Error::FetchFailed {
                slug: self.request.slug.clone(),
                source,
            }
        })
    }
}

/// Fetches the `footer` global.
#[derive(Clone)]
pub struct FooterFetcher {
    inner: GlobalFetcher,
}

impl FooterFetcher {
    pub fn new(backend: Arc<dyn IContentBackend>) -> Self {
        FooterFetcher { inner: GlobalFetcher::new(backend, FOOTER_SLUG) }
    }

    /// Uses the query defaults (depth, locale, draft) from `settings`.
    pub fn from_settings(backend: Arc<dyn IContentBackend>, settings: &Settings) -> Self {
        FooterFetcher { inner: GlobalFetcher::with_request(backend, settings.request_for(FOOTER_SLUG)) }
    }

    pub async fn fetch_footer(&self) -> Result<Option<Footer>> {
        self.inner.fetch::<Footer>().await
    }
}
