use crate::app_dirs::AppDirs;
use crate::ports::errors::AppDirsError;

/// Resolves where shoplist keeps its config, cache and logs on this machine.
pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
