//! Remote identity service port
//!
//! Abstracts the hosted authentication provider: email/password sign-in,
//! password-reset emails and deletion of the signed-in account.

use async_trait::async_trait;

use crate::errors::RemoteError;
use crate::session::UserRecord;

#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Sign in with email and password.
    ///
    /// On success the returned record also becomes the current user.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, RemoteError>;

    /// Ask the provider to email a password-reset link.
    async fn send_password_reset(&self, email: &str) -> Result<(), RemoteError>;

    /// Delete the currently signed-in account on the provider side.
    async fn delete_current_user(&self) -> Result<(), RemoteError>;

    /// The user the provider currently considers signed in, if any.
    async fn current_user(&self) -> Option<UserRecord>;
}
