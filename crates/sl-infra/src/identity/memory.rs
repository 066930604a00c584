use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sl_core::ports::IdentityPort;
use sl_core::{RemoteError, RemoteErrorKind, UserId, UserRecord};

struct Account {
    password: String,
    user: UserRecord,
}

/// Identity service held in memory, for offline runs and tests.
#[derive(Default)]
pub struct InMemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<UserRecord>>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and return its user record.
    pub async fn register(&self, email: &str, password: &str) -> UserRecord {
        let user = UserRecord::new(UserId::generate(), Some(email.to_string()));
        self.accounts.write().await.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );
        user
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

fn invalid_credential() -> RemoteError {
    RemoteError::new(RemoteErrorKind::InvalidCredential, "INVALID_LOGIN_CREDENTIALS")
        .with_code("auth/invalid-credential")
}

#[async_trait]
impl IdentityPort for InMemoryIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, RemoteError> {
        let user = {
            let accounts = self.accounts.read().await;
            match accounts.get(email) {
                Some(account) if account.password == password => account.user.clone(),
                _ => return Err(invalid_credential()),
            }
        };
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), RemoteError> {
        if self.accounts.read().await.contains_key(email) {
            Ok(())
        } else {
            Err(RemoteError::new(RemoteErrorKind::UserNotFound, "EMAIL_NOT_FOUND")
                .with_code("auth/user-not-found"))
        }
    }

    async fn delete_current_user(&self) -> Result<(), RemoteError> {
        let user = self.current.write().await.take().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::Unauthenticated, "no user is signed in")
        })?;
        self.accounts
            .write()
            .await
            .retain(|_, account| account.user.uid != user.uid);
        Ok(())
    }

    async fn current_user(&self) -> Option<UserRecord> {
        self.current.read().await.clone()
    }
}
