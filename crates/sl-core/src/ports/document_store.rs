//! Remote document store port
//!
//! A schemaless document database addressed by collection name. Only the
//! append and list operations are needed.

use async_trait::async_trait;

use crate::document::{Document, Fields};
use crate::errors::RemoteError;
use crate::ids::DocumentId;

#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Append a document and return the id the store assigned to it.
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, RemoteError>;

    /// List every document of a collection in the store's natural order.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError>;
}
