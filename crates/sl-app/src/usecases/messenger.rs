use std::sync::Arc;

use sl_core::i18n::keys;
use sl_core::ports::{NotifierPort, TranslationPort};
use sl_core::Notice;

/// Builds translated notices and hands them to the presentation layer.
#[derive(Clone)]
pub struct Messenger {
    notifier: Arc<dyn NotifierPort>,
    translation: Arc<dyn TranslationPort>,
}

impl Messenger {
    pub fn new(notifier: Arc<dyn NotifierPort>, translation: Arc<dyn TranslationPort>) -> Self {
        Self {
            notifier,
            translation,
        }
    }

    pub fn translate(&self, key: &str) -> String {
        self.translation.translate(key)
    }

    /// An informational notice under the generic "attention" title.
    pub async fn info(&self, message_key: &str) {
        let notice = Notice::info(self.translate(keys::ATTENTION), self.translate(message_key));
        self.notifier.notify(notice).await;
    }

    pub async fn success(&self, title_key: &str, message_key: &str) {
        let notice = Notice::success(self.translate(title_key), self.translate(message_key));
        self.notifier.notify(notice).await;
    }

    /// The uniform failure notice used by every mutating flow.
    pub async fn error(&self, message_key: &str) {
        let notice = Notice::error(self.translate(keys::ERROR), self.translate(message_key));
        self.notifier.notify(notice).await;
    }
}
