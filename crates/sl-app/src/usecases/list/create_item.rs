use std::sync::Arc;

use tracing::{error, info};

use sl_core::i18n::keys;
use sl_core::ports::DocumentStorePort;
use sl_core::{DocumentId, NewItem};

use crate::errors::ListError;
use crate::usecases::messenger::Messenger;

/// Use case for appending a new, unchecked item to the remote store.
///
/// The title is taken as typed; it is not checked for emptiness.
pub struct CreateItem {
    store: Arc<dyn DocumentStorePort>,
    messenger: Messenger,
}

impl CreateItem {
    pub fn new(store: Arc<dyn DocumentStorePort>, messenger: Messenger) -> Self {
        Self { store, messenger }
    }

    #[tracing::instrument(name = "usecase.create_item.execute", skip(self, title))]
    pub async fn execute(&self, collection: &str, title: &str) -> Result<DocumentId, ListError> {
        let fields = NewItem::new(title).into_fields();

        match self.store.add_document(collection, fields).await {
            Ok(id) => {
                info!(id = %id, "item saved");
                self.messenger.success(keys::SUCCESS, keys::ITEM_SAVED).await;
                Ok(id)
            }
            Err(err) => {
                error!(kind = ?err.kind, message = %err.message, "failed to save item");
                self.messenger.error(keys::ITEM_SAVE_FAILED).await;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{messenger, MockStore, RecordingNotifier};
    use sl_core::{Item, NoticeLevel};

    #[tokio::test]
    async fn test_execute_writes_unchecked_item() {
        let store = Arc::new(MockStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = CreateItem::new(store.clone(), messenger(notifier.clone()));

        let id = use_case.execute("items", "Mouse Gamer").await.unwrap();

        let documents = store.list_documents("items").await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(Item::from_document(&documents[0]), Item::new(id, "Mouse Gamer", false));
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, keys::ITEM_SAVED);
    }

    #[tokio::test]
    async fn test_execute_accepts_empty_title() {
        let store = Arc::new(MockStore::default());
        let use_case = CreateItem::new(store.clone(), messenger(Arc::new(RecordingNotifier::default())));

        assert!(use_case.execute("items", "").await.is_ok());
        assert_eq!(MockStore::calls(&store.add_calls), 1);
    }

    #[tokio::test]
    async fn test_execute_reports_failure_to_user() {
        let store = Arc::new(MockStore::default());
        store.set_fail_add(true);
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = CreateItem::new(store, messenger(notifier.clone()));

        let result = use_case.execute("items", "Mouse").await;

        assert!(matches!(result, Err(ListError::Remote(_))));
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, keys::ITEM_SAVE_FAILED);
    }
}
