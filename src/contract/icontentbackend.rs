use async_trait::async_trait;
use serde_json::Value;
use crate::contract::lib::BackendError;

/// Options accepted by the backend's find-global operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindGlobalRequest {
    pub slug: String,
    /// How many levels of relationships to populate.
    pub depth: Option<u32>,
    pub locale: Option<String>,
    pub fallback_locale: Option<String>,
    pub draft: Option<bool>,
}

impl FindGlobalRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        FindGlobalRequest {
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Query parameters in the form the REST api expects.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if let Some(depth) = self.depth {
            params.push(("depth", depth.to_string()));
        }
        if let Some(locale) = &self.locale {
            params.push(("locale", locale.clone()));
        }
        if let Some(locale) = &self.fallback_locale {
            params.push(("fallback-locale", locale.clone()));
        }
        if let Some(draft) = self.draft {
            params.push(("draft", draft.to_string()));
        }
        params
    }
}

/// A content backend able to look up global documents.
///
/// `Ok(None)` means the backend answered but holds no document for the slug.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IContentBackend: Send + Sync {
    async fn find_global(&self, request: &FindGlobalRequest) -> Result<Option<Value>, BackendError>;
}
