//! # sl-core
//!
//! Core domain models and ports for Shoplist.
//!
//! This crate contains pure business types and the port traits the
//! application layer talks to. It has no infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod document;
pub mod errors;
pub mod i18n;
pub mod ids;
pub mod item;
pub mod navigation;
pub mod notice;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use document::{Document, FieldValue, Fields};
pub use errors::{CacheError, RemoteError, RemoteErrorKind, ValidationError};
pub use i18n::Locale;
pub use ids::{DocumentId, UserId};
pub use item::{Item, ListView, NewItem};
pub use navigation::Route;
pub use notice::{ConfirmRequest, Notice, NoticeLevel};
pub use session::{Session, SessionState, UserRecord};
