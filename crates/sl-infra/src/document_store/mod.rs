mod firestore;
mod memory;

pub use firestore::{FirestoreDocumentStore, DEFAULT_FIRESTORE_ENDPOINT};
pub use memory::InMemoryDocumentStore;
