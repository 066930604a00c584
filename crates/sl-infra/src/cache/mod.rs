mod file_cache;
mod memory;

pub use file_cache::{FileKeyValueCache, DEFAULT_CACHE_FILE};
pub use memory::InMemoryKeyValueCache;
