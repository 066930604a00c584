//! Presentation ports: the only way flows reach the user.

use async_trait::async_trait;

use crate::notice::{ConfirmRequest, Notice};

#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn notify(&self, notice: Notice);
}

#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Ask the user a yes/no question; `true` means confirmed.
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}
