//! Shoplist console application
//!
//! Bootstrap (config, tracing, wiring), the console presentation adapters and
//! the interactive shell that drives the application layer.

pub mod adapters;
pub mod bootstrap;
pub mod shell;
