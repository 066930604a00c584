use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sl_core::document::{Document, Fields};
use sl_core::ports::DocumentStorePort;
use sl_core::{DocumentId, RemoteError};

/// Document store held in memory. Natural order is insertion order.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document with a caller-chosen id.
    pub async fn insert(&self, collection: &str, document: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, RemoteError> {
        let id = DocumentId::generate();
        self.insert(collection, Document::new(id.clone(), fields)).await;
        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
