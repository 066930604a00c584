//! Process startup: directories, logging, configuration and wiring.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use run::run_app;
