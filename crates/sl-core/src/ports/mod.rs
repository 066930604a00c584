//! Port interfaces for the application layer
//!
//! Ports define the contract between the flows (use cases) and the
//! collaborators that implement them: the remote identity service, the
//! remote document store, the local durable cache and the presentation
//! shell (navigation, translation, notices, confirmation dialogs).
//!
//! Every remote or cache call returns a `Result` carrying a typed error so
//! that callers branch explicitly on success and failure.

pub mod app_dirs;
pub mod cache;
pub mod document_store;
pub mod errors;
pub mod identity;
pub mod navigation;
pub mod presentation;
pub mod translation;

pub use app_dirs::AppDirsPort;
pub use cache::KeyValueCachePort;
pub use document_store::DocumentStorePort;
pub use errors::AppDirsError;
pub use identity::IdentityPort;
pub use navigation::NavigationPort;
pub use presentation::{ConfirmationPort, NotifierPort};
pub use translation::TranslationPort;
