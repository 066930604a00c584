//! # Application Dependencies
//!
//! Dependency grouping for [`crate::App`] construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use sl_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Remote dependencies
    pub identity: Arc<dyn IdentityPort>,
    pub document_store: Arc<dyn DocumentStorePort>,

    // Local dependencies
    pub cache: Arc<dyn KeyValueCachePort>,

    // Presentation dependencies
    pub navigation: Arc<dyn NavigationPort>,
    pub translation: Arc<dyn TranslationPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub confirmation: Arc<dyn ConfirmationPort>,
}
