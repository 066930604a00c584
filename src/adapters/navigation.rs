use std::sync::Mutex;

use tokio::sync::mpsc;
use tracing::{debug, info};

use sl_core::ports::NavigationPort;
use sl_core::Route;

/// Keeps the screen stack and announces every route entered.
///
/// The shell drains the announcements after each command, which keeps
/// navigation fire-and-forget for the flows that trigger it.
pub struct RouteTracker {
    stack: Mutex<Vec<Route>>,
    entered: mpsc::UnboundedSender<Route>,
}

impl RouteTracker {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (entered, receiver) = mpsc::unbounded_channel();
        let tracker = Self {
            stack: Mutex::new(vec![Route::Entry]),
            entered,
        };
        (tracker, receiver)
    }

    pub fn current(&self) -> Route {
        self.stack
            .lock()
            .map(|stack| stack.last().copied().unwrap_or(Route::Entry))
            .unwrap_or(Route::Entry)
    }

    /// Pop the top screen; the entry screen is never popped.
    pub fn back(&self) -> Route {
        if let Ok(mut stack) = self.stack.lock() {
            if stack.len() > 1 {
                stack.pop();
            }
        }
        let route = self.current();
        self.announce(route);
        route
    }

    fn announce(&self, route: Route) {
        if self.entered.send(route).is_err() {
            debug!(route = %route, "no listener for route change");
        }
    }
}

impl NavigationPort for RouteTracker {
    fn push(&self, route: Route) {
        if let Ok(mut stack) = self.stack.lock() {
            stack.push(route);
        }
        info!(route = %route, "navigate push");
        self.announce(route);
    }

    fn replace(&self, route: Route) {
        if let Ok(mut stack) = self.stack.lock() {
            stack.clear();
            stack.push(route);
        }
        info!(route = %route, "navigate replace");
        self.announce(route);
    }
}
