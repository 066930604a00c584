mod delete_account;
mod request_password_reset;
mod restore_session;
mod sign_in;
mod sign_out;

pub use delete_account::DeleteAccount;
pub use request_password_reset::RequestPasswordReset;
pub use restore_session::RestoreSession;
pub use sign_in::SignIn;
pub use sign_out::SignOut;
