//! Session state machine.
//!
//! Defines a pure state transition function for the authentication lifecycle.

use tracing::warn;

use super::{Session, SessionState};

/// Events that drive the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A cached session was found at startup.
    Restored(Session),
    /// No cached session, or the cache could not be read.
    RestoreMissed,
    /// Remote sign-in succeeded and the session was cached.
    SignedIn(Session),
    /// Local sign-out removed the cached session.
    SignedOut,
    /// Remote identity deleted and the cached session removed.
    AccountDeleted,
}

/// Pure session state machine.
pub struct SessionStateMachine;

impl SessionStateMachine {
    pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
        match (state, event) {
            (_, SessionEvent::Restored(session)) => SessionState::Authenticated(session),
            (_, SessionEvent::RestoreMissed) => SessionState::Unauthenticated,
            (SessionState::Unauthenticated, SessionEvent::SignedIn(session)) => {
                SessionState::Authenticated(session)
            }
            (SessionState::Authenticated(_), SessionEvent::SignedIn(session)) => {
                // Signing in again replaces the cached record.
                SessionState::Authenticated(session)
            }
            (_, SessionEvent::SignedOut) | (_, SessionEvent::AccountDeleted) => {
                SessionState::Unauthenticated
            }
        }
    }

    /// Like [`Self::transition`] but logs transitions that change nothing.
    pub fn apply(state: SessionState, event: SessionEvent) -> SessionState {
        if !state.is_authenticated()
            && matches!(event, SessionEvent::SignedOut | SessionEvent::AccountDeleted)
        {
            warn!(?event, "session event received while already unauthenticated");
        }
        Self::transition(state, event)
    }
}
