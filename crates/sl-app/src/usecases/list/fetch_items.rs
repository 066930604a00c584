use std::sync::Arc;

use tracing::{debug, warn};

use sl_core::i18n::keys;
use sl_core::ports::DocumentStorePort;
use sl_core::Item;

use crate::errors::ListError;
use crate::usecases::messenger::Messenger;

/// Use case for reading every item of a collection.
pub struct FetchItems {
    store: Arc<dyn DocumentStorePort>,
    messenger: Messenger,
}

impl FetchItems {
    pub fn new(store: Arc<dyn DocumentStorePort>, messenger: Messenger) -> Self {
        Self { store, messenger }
    }

    /// Items in the store's natural order.
    #[tracing::instrument(name = "usecase.fetch_items.execute", skip(self))]
    pub async fn execute(&self, collection: &str) -> Result<Vec<Item>, ListError> {
        match self.store.list_documents(collection).await {
            Ok(documents) => {
                let items: Vec<Item> = documents.iter().map(Item::from_document).collect();
                debug!(count = items.len(), "items loaded");
                Ok(items)
            }
            Err(err) => {
                warn!(kind = ?err.kind, message = %err.message, "failed to load items");
                self.messenger.error(keys::ITEMS_LOAD_FAILED).await;
                Err(err.into())
            }
        }
    }
}
