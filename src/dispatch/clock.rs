//! Time source for the refresh-clock intent.

/// Supplies the current time, already formatted for display.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Local wall-clock time, e.g. `Mon Oct 19 2026 10:00:00 GMT+0200`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Local::now()
            .format("%a %b %d %Y %H:%M:%S GMT%z")
            .to_string()
    }
}
