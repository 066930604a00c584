//! Shoplist infrastructure adapters
//!
//! Implementations of the `sl-core` ports: the local JSON cache, the hosted
//! identity and document REST clients, the static translation catalog and
//! application directory resolution.

pub mod cache;
pub mod document_store;
pub mod fs;
pub mod http;
pub mod i18n;
pub mod identity;

pub use cache::{FileKeyValueCache, InMemoryKeyValueCache};
pub use document_store::{FirestoreDocumentStore, InMemoryDocumentStore};
pub use fs::DirsAppDirsAdapter;
pub use i18n::StaticTranslator;
pub use identity::{FirebaseIdentityClient, InMemoryIdentity};
