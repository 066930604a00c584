mod app_dirs;

pub use app_dirs::{DirsAppDirsAdapter, PROFILE_ENV};
