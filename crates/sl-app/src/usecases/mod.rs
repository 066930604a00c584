//! Business logic use cases
//!
//! [SessionManager]                    [ListSynchronizer]
//!   RestoreSession → push List  ───────→  FetchItems
//!   SignIn         → push List            CreateItem → FetchItems
//!   SignOut        → push Entry
//!   DeleteAccount  → replace Entry
//!
//! Each use case talks to ports only and reports failures to the user
//! through the [`messenger::Messenger`]. State lives in the managers.

pub mod language;
pub mod list;
pub mod messenger;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use language::{ChangeLanguage, RestoreLanguage};
pub use list::{CreateItem, FetchItems};
pub use messenger::Messenger;
pub use session::{DeleteAccount, RequestPasswordReset, RestoreSession, SignIn, SignOut};
