mod firebase;
mod memory;

pub use firebase::{FirebaseIdentityClient, DEFAULT_IDENTITY_ENDPOINT};
pub use memory::InMemoryIdentity;
