//! List synchronizer.
//!
//! Keeps the in-memory projection of the remote item collection and the
//! draft title typed on the list screen. The remote store is the source of
//! truth; every fetch replaces the whole sequence.
//!
//! The projection belongs to one session. Once the session manager moves to
//! a new generation (sign-out, account deletion, another sign-in) the items
//! and the draft are dropped before anything reads them.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use sl_core::i18n::keys;
use sl_core::{DocumentId, Item, ListView};

use crate::deps::AppDeps;
use crate::errors::ListError;
use crate::session_manager::SessionManager;
use crate::usecases::{CreateItem, FetchItems, Messenger};

#[derive(Default)]
struct Projection {
    generation: u64,
    items: Vec<Item>,
    draft: String,
}

pub struct ListSynchronizer {
    projection: Mutex<Projection>,
    collection: String,

    session: Arc<SessionManager>,
    fetch_items: FetchItems,
    create_item: CreateItem,
    messenger: Messenger,
}

impl ListSynchronizer {
    pub fn new(
        collection: impl Into<String>,
        session: Arc<SessionManager>,
        fetch_items: FetchItems,
        create_item: CreateItem,
        messenger: Messenger,
    ) -> Self {
        let projection = Projection {
            generation: session.generation(),
            ..Projection::default()
        };
        Self {
            projection: Mutex::new(projection),
            collection: collection.into(),
            session,
            fetch_items,
            create_item,
            messenger,
        }
    }

    pub fn from_deps(
        deps: &AppDeps,
        collection: impl Into<String>,
        session: Arc<SessionManager>,
    ) -> Self {
        let messenger = Messenger::new(deps.notifier.clone(), deps.translation.clone());
        Self::new(
            collection,
            session,
            FetchItems::new(deps.document_store.clone(), messenger.clone()),
            CreateItem::new(deps.document_store.clone(), messenger.clone()),
            messenger,
        )
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub async fn items(&self) -> Vec<Item> {
        self.current().await.items.clone()
    }

    pub async fn view(&self) -> ListView {
        ListView::from_items(&self.current().await.items)
    }

    pub async fn draft(&self) -> String {
        self.current().await.draft.clone()
    }

    pub async fn set_draft(&self, title: impl Into<String>) {
        self.current().await.draft = title.into();
    }

    /// Drop the items and the draft.
    pub async fn reset(&self) {
        let mut projection = self.current().await;
        projection.items.clear();
        projection.draft.clear();
    }

    /// Replace the local sequence with the remote collection.
    ///
    /// On failure the previous sequence is kept.
    pub async fn fetch_all(&self) -> Result<(), ListError> {
        self.ensure_authenticated().await?;
        let generation = self.session.generation();

        let items = self.fetch_items.execute(&self.collection).await?;

        let mut projection = self.current().await;
        if projection.generation != generation {
            debug!(collection = %self.collection, "session changed during fetch, result dropped");
            return Err(ListError::SessionChanged);
        }
        let count = items.len();
        projection.items = items;
        debug!(count, collection = %self.collection, "item list replaced");
        Ok(())
    }

    /// Append an unchecked item, clear the draft and refresh the list.
    ///
    /// A failed refresh after a successful write is logged only; the write
    /// itself already succeeded.
    pub async fn create_item(&self, title: &str) -> Result<DocumentId, ListError> {
        self.ensure_authenticated().await?;
        let generation = self.session.generation();

        let id = self.create_item.execute(&self.collection, title).await?;
        {
            let mut projection = self.current().await;
            if projection.generation == generation {
                projection.draft.clear();
            }
        }

        if let Err(err) = self.fetch_all().await {
            warn!(error = %err, "refresh after create failed");
        }
        Ok(id)
    }

    /// Create an item from the current draft title.
    pub async fn submit_draft(&self) -> Result<DocumentId, ListError> {
        let title = self.draft().await;
        self.create_item(&title).await
    }

    /// Lock the projection, first discarding it if it belongs to an earlier
    /// session generation.
    async fn current(&self) -> MutexGuard<'_, Projection> {
        let generation = self.session.generation();
        let mut projection = self.projection.lock().await;
        if projection.generation != generation {
            if !projection.items.is_empty() || !projection.draft.is_empty() {
                debug!(
                    from = projection.generation,
                    to = generation,
                    "session changed, list projection dropped"
                );
            }
            *projection = Projection {
                generation,
                ..Projection::default()
            };
        }
        projection
    }

    async fn ensure_authenticated(&self) -> Result<(), ListError> {
        if self.session.is_authenticated().await {
            return Ok(());
        }
        info!("list operation rejected without a session");
        self.messenger.info(keys::SESSION_REQUIRED).await;
        Err(ListError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        FixedConfirmation, KeyTranslator, MockCache, MockIdentity, MockStore, RecordingNavigator,
        RecordingNotifier,
    };
    use sl_core::document::Fields;
    use sl_core::item::{IS_CHECKED_FIELD, TITLE_FIELD};
    use sl_core::session::SESSION_CACHE_KEY;
    use sl_core::{Document, NoticeLevel};

    struct Fixture {
        list: ListSynchronizer,
        session: Arc<SessionManager>,
        store: Arc<MockStore>,
        notifier: Arc<RecordingNotifier>,
    }

    async fn fixture(store: MockStore, signed_in: bool) -> Fixture {
        let store = Arc::new(store);
        let notifier = Arc::new(RecordingNotifier::default());
        let cache = if signed_in {
            MockCache::with_entry(SESSION_CACHE_KEY, r#"{"uid":"abc"}"#)
        } else {
            MockCache::default()
        };
        let deps = AppDeps {
            identity: Arc::new(MockIdentity::new()),
            document_store: store.clone(),
            cache: Arc::new(cache),
            navigation: Arc::new(RecordingNavigator::default()),
            translation: Arc::new(KeyTranslator::default()),
            notifier: notifier.clone(),
            confirmation: Arc::new(FixedConfirmation::answering(true)),
        };
        let session = Arc::new(SessionManager::from_deps(&deps));
        session.restore_session().await;

        Fixture {
            list: ListSynchronizer::from_deps(&deps, "items", session.clone()),
            session,
            store,
            notifier,
        }
    }

    fn document(id: &str, title: &str, is_checked: bool) -> Document {
        let mut fields = Fields::new();
        fields.insert(TITLE_FIELD.into(), title.into());
        fields.insert(IS_CHECKED_FIELD.into(), is_checked.into());
        Document::new(id, fields)
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_sequence() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", false)]);
        let f = fixture(store, true).await;
        assert_eq!(f.list.view().await, ListView::Loading);

        f.list.fetch_all().await.unwrap();

        let expected = vec![Item::new("1", "Mouse", false)];
        assert_eq!(f.list.items().await, expected);
        assert_eq!(f.list.view().await, ListView::Loaded(expected));
    }

    #[tokio::test]
    async fn test_fetch_all_failure_keeps_previous_sequence() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", true)]);
        let f = fixture(store, true).await;
        f.list.fetch_all().await.unwrap();

        f.store.set_fail_list(true);
        let result = f.list.fetch_all().await;

        assert!(matches!(result, Err(ListError::Remote(_))));
        assert_eq!(f.list.items().await, vec![Item::new("1", "Mouse", true)]);
        assert_eq!(f.notifier.last().unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_create_item_clears_draft_and_refetches_once() {
        let f = fixture(MockStore::default(), true).await;
        f.list.set_draft("Mouse Gamer").await;

        let id = f.list.submit_draft().await.unwrap();

        assert_eq!(f.list.draft().await, "");
        assert_eq!(MockStore::calls(&f.store.add_calls), 1);
        assert_eq!(MockStore::calls(&f.store.list_calls), 1);
        assert_eq!(f.list.items().await, vec![Item::new(id, "Mouse Gamer", false)]);
    }

    #[tokio::test]
    async fn test_create_item_failure_keeps_draft_and_list() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", false)]);
        let f = fixture(store, true).await;
        f.list.fetch_all().await.unwrap();
        f.list.set_draft("Teclado").await;
        f.store.set_fail_add(true);

        assert!(f.list.submit_draft().await.is_err());

        assert_eq!(f.list.draft().await, "Teclado");
        assert_eq!(f.list.items().await, vec![Item::new("1", "Mouse", false)]);
        assert_eq!(MockStore::calls(&f.store.list_calls), 1);
    }

    #[tokio::test]
    async fn test_create_item_succeeds_when_refresh_fails() {
        let f = fixture(MockStore::default(), true).await;
        f.store.set_fail_list(true);
        f.list.set_draft("Mouse").await;

        assert!(f.list.submit_draft().await.is_ok());
        assert_eq!(f.list.draft().await, "");
        assert!(f.list.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_operations_require_session() {
        let f = fixture(MockStore::default(), false).await;

        assert!(matches!(f.list.fetch_all().await, Err(ListError::Unauthenticated)));
        assert!(matches!(
            f.list.create_item("Mouse").await,
            Err(ListError::Unauthenticated)
        ));

        assert_eq!(MockStore::calls(&f.store.list_calls), 0);
        assert_eq!(MockStore::calls(&f.store.add_calls), 0);
        assert_eq!(f.notifier.last().unwrap().message, keys::SESSION_REQUIRED);
    }

    #[tokio::test]
    async fn test_sign_out_drops_items_and_draft() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", false)]);
        let f = fixture(store, true).await;
        f.list.fetch_all().await.unwrap();
        f.list.set_draft("Teclado").await;

        f.session.sign_out().await.unwrap();

        assert_eq!(f.list.view().await, ListView::Loading);
        assert_eq!(f.list.draft().await, "");
    }

    #[tokio::test]
    async fn test_failed_fetch_after_new_sign_in_shows_no_previous_items() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", false)]);
        let f = fixture(store, true).await;
        f.list.fetch_all().await.unwrap();
        f.session.sign_out().await.unwrap();
        f.session.sign_in("b@c.com", "secret").await.unwrap();

        f.store.set_fail_list(true);
        assert!(f.list.fetch_all().await.is_err());

        assert!(f.list.items().await.is_empty());
        assert_eq!(f.list.view().await, ListView::Loading);
    }

    #[tokio::test]
    async fn test_reset_clears_projection() {
        let store = MockStore::with_documents("items", vec![document("1", "Mouse", false)]);
        let f = fixture(store, true).await;
        f.list.fetch_all().await.unwrap();
        f.list.set_draft("Teclado").await;

        f.list.reset().await;

        assert!(f.list.items().await.is_empty());
        assert_eq!(f.list.draft().await, "");
    }
}
