use crate::navigation::Route;

/// Navigation service. Fire-and-forget: callers never wait for the screen.
pub trait NavigationPort: Send + Sync {
    fn push(&self, route: Route);
    fn replace(&self, route: Route);
}
