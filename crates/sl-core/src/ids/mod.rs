mod id_macro;

use id_macro::string_id;

string_id! {
    /// Identifier assigned by the remote document store.
    DocumentId;
    /// Identifier assigned by the remote identity provider.
    UserId;
}

impl DocumentId {
    /// Random id for stores that assign ids locally.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl UserId {
    /// Random id for identity stand-ins that run without a provider.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}
