//! Session manager.
//!
//! Owns the authentication state and drives it through the session state
//! machine after each use case completes. Navigation happens only after the
//! new state is in place.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use sl_core::ports::NavigationPort;
use sl_core::session::{SessionEvent, SessionState, SessionStateMachine};
use sl_core::{Route, Session};

use crate::deps::AppDeps;
use crate::errors::SessionError;
use crate::usecases::{
    DeleteAccount, Messenger, RequestPasswordReset, RestoreSession, SignIn, SignOut,
};

fn state_label(state: &SessionState) -> &'static str {
    match state {
        SessionState::Unauthenticated => "unauthenticated",
        SessionState::Authenticated(_) => "authenticated",
    }
}

pub struct SessionManager {
    state: RwLock<SessionState>,
    /// Bumped on every transition; data loaded for one session is stale
    /// once this moves on.
    generation: AtomicU64,

    restore_session: RestoreSession,
    sign_in: SignIn,
    request_password_reset: RequestPasswordReset,
    sign_out: SignOut,
    delete_account: DeleteAccount,
    navigation: Arc<dyn NavigationPort>,
}

impl SessionManager {
    pub fn new(
        restore_session: RestoreSession,
        sign_in: SignIn,
        request_password_reset: RequestPasswordReset,
        sign_out: SignOut,
        delete_account: DeleteAccount,
        navigation: Arc<dyn NavigationPort>,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::Unauthenticated),
            generation: AtomicU64::new(0),
            restore_session,
            sign_in,
            request_password_reset,
            sign_out,
            delete_account,
            navigation,
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        let messenger = Messenger::new(deps.notifier.clone(), deps.translation.clone());
        Self::new(
            RestoreSession::new(deps.cache.clone()),
            SignIn::new(deps.identity.clone(), deps.cache.clone(), messenger.clone()),
            RequestPasswordReset::new(deps.identity.clone(), messenger.clone()),
            SignOut::new(deps.cache.clone(), messenger.clone()),
            DeleteAccount::new(
                deps.identity.clone(),
                deps.cache.clone(),
                deps.confirmation.clone(),
                messenger,
            ),
            deps.navigation.clone(),
        )
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session().cloned()
    }

    /// Identifies the current session lifetime.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Decide the initial state from the local cache.
    ///
    /// Returns `true` and moves to the list screen when a session was cached.
    pub async fn restore_session(&self) -> bool {
        match self.restore_session.execute().await {
            Some(session) => {
                self.dispatch(SessionEvent::Restored(session)).await;
                self.navigation.push(Route::List);
                true
            }
            None => {
                self.dispatch(SessionEvent::RestoreMissed).await;
                false
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let session = self.sign_in.execute(email, password).await?;
        self.dispatch(SessionEvent::SignedIn(session)).await;
        self.navigation.push(Route::List);
        Ok(())
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), SessionError> {
        self.request_password_reset.execute(email).await
    }

    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.sign_out.execute().await?;
        self.dispatch(SessionEvent::SignedOut).await;
        self.navigation.push(Route::Entry);
        Ok(())
    }

    pub async fn delete_account(&self) -> Result<(), SessionError> {
        self.delete_account.execute().await?;
        self.dispatch(SessionEvent::AccountDeleted).await;
        self.navigation.replace(Route::Entry);
        Ok(())
    }

    async fn dispatch(&self, event: SessionEvent) -> SessionState {
        let mut state = self.state.write().await;
        let from = state_label(&state);
        let next = SessionStateMachine::apply(state.clone(), event);
        info!(from, to = state_label(&next), "session state transition");
        *state = next.clone();
        self.generation.fetch_add(1, Ordering::AcqRel);
        next
    }
}
