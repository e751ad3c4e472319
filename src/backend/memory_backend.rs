use std::collections::HashMap;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use crate::contract::icontentbackend::{FindGlobalRequest, IContentBackend};
use crate::contract::lib::BackendError;

/// Serves globals from memory. Query options are ignored.
#[derive(Default)]
pub struct InMemoryContentBackend {
    globals: RwLock<HashMap<String, Value>>,
}

impl InMemoryContentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_globals(globals: HashMap<String, Value>) -> Self {
        InMemoryContentBackend { globals: RwLock::new(globals) }
    }

    pub async fn insert(&self, slug: impl Into<String>, document: Value) -> Option<Value> {
        self.globals.write().await.insert(slug.into(), document)
    }

    pub async fn remove(&self, slug: &str) -> Option<Value> {
        self.globals.write().await.remove(slug)
    }
}

#[async_trait]
impl IContentBackend for InMemoryContentBackend {
    async fn find_global(&self, request: &FindGlobalRequest) -> Result<Option<Value>, BackendError> {
        Ok(self.globals.read().await.get(&request.slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[tokio::test]
    async fn returns_stored_global_or_none() {
        let backend = InMemoryContentBackend::new();
        backend.insert("footer", json!({"id": 1})).await;

        let footer = backend.find_global(&FindGlobalRequest::new("footer")).await.unwrap();
        let header = backend.find_global(&FindGlobalRequest::new("header")).await.unwrap();

        assert_eq!(footer, Some(json!({"id": 1})));
        assert_eq!(header, None);
    }

    #[tokio::test]
    async fn removed_global_is_absent() {
        let backend = InMemoryContentBackend::with_globals(HashMap::from([
            ("footer".to_string(), json!({"id": 1})),
        ]));

        assert_eq!(backend.remove("footer").await, Some(json!({"id": 1})));
        assert_eq!(backend.find_global(&FindGlobalRequest::new("footer")).await.unwrap(), None);
    }
}
