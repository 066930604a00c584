//! Hand-written port mocks shared by the use-case unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sl_core::ports::{
    ConfirmationPort, DocumentStorePort, IdentityPort, KeyValueCachePort, NavigationPort,
    NotifierPort, TranslationPort,
};
use sl_core::{
    CacheError, ConfirmRequest, Document, DocumentId, Fields, Locale, Notice, RemoteError,
    RemoteErrorKind, Route, UserRecord,
};

use super::messenger::Messenger;

#[derive(Default)]
pub struct MockCache {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: Mutex<Vec<(String, String)>>,
    deletes: Mutex<Vec<String>>,
}

impl MockCache {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        cache
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueCachePort for MockCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::Backend("mock read failure".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::Backend("mock write failure".to_string()));
        }
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::Backend("mock delete failure".to_string()));
        }
        self.deletes.lock().unwrap().push(key.to_string());
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

pub struct MockIdentity {
    user: UserRecord,
    current: Mutex<Option<UserRecord>>,
    sign_in_error: Mutex<Option<RemoteError>>,
    reset_error: Mutex<Option<RemoteError>>,
    delete_error: Mutex<Option<RemoteError>>,
    pub sign_in_calls: AtomicUsize,
    pub reset_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl MockIdentity {
    pub fn new() -> Self {
        Self {
            user: UserRecord::new("user-1", Some("a@b.com".to_string())),
            current: Mutex::new(None),
            sign_in_error: Mutex::new(None),
            reset_error: Mutex::new(None),
            delete_error: Mutex::new(None),
            sign_in_calls: AtomicUsize::new(0),
            reset_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn signed_in() -> Self {
        let identity = Self::new();
        *identity.current.lock().unwrap() = Some(identity.user.clone());
        identity
    }

    pub fn user(&self) -> UserRecord {
        self.user.clone()
    }

    pub fn fail_sign_in(&self, err: RemoteError) {
        *self.sign_in_error.lock().unwrap() = Some(err);
    }

    pub fn fail_reset(&self) {
        *self.reset_error.lock().unwrap() =
            Some(RemoteError::new(RemoteErrorKind::UserNotFound, "EMAIL_NOT_FOUND"));
    }

    pub fn fail_delete(&self) {
        *self.delete_error.lock().unwrap() = Some(RemoteError::new(
            RemoteErrorKind::Unauthenticated,
            "CREDENTIAL_TOO_OLD_LOGIN_AGAIN",
        ));
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityPort for MockIdentity {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<UserRecord, RemoteError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.sign_in_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.current.lock().unwrap() = Some(self.user.clone());
        Ok(self.user.clone())
    }

    async fn send_password_reset(&self, _email: &str) -> Result<(), RemoteError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        match self.reset_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_current_user(&self) -> Result<(), RemoteError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.current.lock().unwrap() = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<UserRecord> {
        self.current.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct MockStore {
    documents: Mutex<Vec<(String, Document)>>,
    fail_list: AtomicBool,
    fail_add: AtomicBool,
    pub list_calls: AtomicUsize,
    pub add_calls: AtomicUsize,
}

impl MockStore {
    pub fn with_documents(collection: &str, documents: Vec<Document>) -> Self {
        let store = Self::default();
        store.documents.lock().unwrap().extend(
            documents
                .into_iter()
                .map(|document| (collection.to_string(), document)),
        );
        store
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_add(&self, fail: bool) {
        self.fail_add.store(fail, Ordering::SeqCst);
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStorePort for MockStore {
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, RemoteError> {
        let n = self.add_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(RemoteError::new(RemoteErrorKind::PermissionDenied, "PERMISSION_DENIED"));
        }
        let id = DocumentId::from(format!("doc-{}", n + 1));
        self.documents
            .lock()
            .unwrap()
            .push((collection.to_string(), Document::new(id.clone(), fields)));
        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(RemoteError::new(RemoteErrorKind::Network, "connection reset"));
        }
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, d)| d.clone())
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCall {
    Push(Route),
    Replace(Route),
}

#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<NavCall>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NavigationPort for RecordingNavigator {
    fn push(&self, route: Route) {
        self.calls.lock().unwrap().push(NavCall::Push(route));
    }

    fn replace(&self, route: Route) {
        self.calls.lock().unwrap().push(NavCall::Replace(route));
    }
}

pub struct FixedConfirmation {
    answer: bool,
    asked: Mutex<Vec<ConfirmRequest>>,
}

impl FixedConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<ConfirmRequest> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationPort for FixedConfirmation {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.asked.lock().unwrap().push(request);
        self.answer
    }
}

/// Translator that returns the key itself, so tests can assert on keys.
#[derive(Default)]
pub struct KeyTranslator {
    locale: Mutex<Locale>,
}

impl TranslationPort for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }

    fn set_language(&self, locale: Locale) {
        *self.locale.lock().unwrap() = locale;
    }

    fn language(&self) -> Locale {
        *self.locale.lock().unwrap()
    }
}

pub fn messenger(notifier: Arc<RecordingNotifier>) -> Messenger {
    Messenger::new(notifier, Arc::new(KeyTranslator::default()))
}
