//! Console implementations of the presentation ports.

pub mod console;
pub mod navigation;

pub use console::{Console, ConsoleConfirmation, ConsoleNotifier};
pub use navigation::RouteTracker;
