//! Shoplist application layer
//!
//! This crate contains the session and list flows as use cases plus the two
//! stateful managers that sequence them.

pub mod app;
pub mod deps;
pub mod errors;
pub mod list_synchronizer;
pub mod session_manager;
pub mod usecases;

pub use app::{App, AppOptions};
pub use deps::AppDeps;
pub use errors::{LanguageError, ListError, SessionError};
pub use list_synchronizer::ListSynchronizer;
pub use session_manager::SessionManager;
