//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use registry_store::RegistryStore;

/// Application state shared across handlers.
pub struct AppState {
    /// The one lock around the store. Mutating handlers hold the write guard
    /// until the operation and its cascades are done.
    pub store: RwLock<RegistryStore>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(store: RegistryStore) -> Self {
        Self {
            store: RwLock::new(store),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RegistryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_store::CourseInput;

    #[tokio::test]
    async fn test_app_state_starts_empty() {
        let state = AppState::default();
        let store = state.store.read().await;
        assert_eq!(store.course_count(), 0);
        assert_eq!(store.participant_count(), 0);
    }

    #[tokio::test]
    async fn test_app_state_wraps_given_store() {
        let mut store = RegistryStore::new();
        store.create_course(CourseInput::new(1, "Algo", "Ada")).unwrap();
        let state = AppState::new(store);
        assert_eq!(state.store.read().await.course_count(), 1);
    }

    #[test]
    fn test_request_count() {
        let state = AppState::default();
        assert_eq!(state.request_count(), 0);

        state.increment_requests();
        assert_eq!(state.request_count(), 1);

        state.increment_requests();
        assert_eq!(state.request_count(), 2);
    }

    #[test]
    fn test_uptime() {
        let state = AppState::default();
        std::thread::sleep(Duration::from_millis(10));
        assert!(state.uptime().as_millis() >= 10);
    }
}
