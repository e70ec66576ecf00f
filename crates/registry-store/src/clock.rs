//! Creation timestamps.

use std::fmt;

/// chrono format string for `created_at` values.
pub const CREATED_AT_FORMAT: &str = "Created on %Y-%m-%d at %H:%M:%S.";

/// Source of `created_at` stamps.
///
/// The store keeps whatever string the clock returns and never parses it.
pub trait Clock: Send + Sync + fmt::Debug {
    fn stamp(&self) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn stamp(&self) -> String {
        chrono::Local::now().format(CREATED_AT_FORMAT).to_string()
    }
}

/// Clock that always returns the same stamp.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn stamp(&self) -> String {
        self.0.clone()
    }
}
