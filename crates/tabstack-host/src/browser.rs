//! Window, location and scheduling contract.

use std::time::Duration;

/// Location, history, viewport and timer access.
pub trait Browser {
    /// Current URL fragment including the leading `#`, or empty if none.
    fn location_hash(&self) -> String;

    /// Push a history entry for `url` without navigating.
    fn push_state(&mut self, url: &str);

    /// Inner height of the viewport in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;

    /// Ask the driver to call back into the core after `delay`.
    ///
    /// Several requests may be outstanding; each callback drains whatever is
    /// due at that moment.
    fn request_wake(&mut self, delay: Duration);
}
