//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::analytics::MoodAnalytics;
use crate::journal::MoodJournal;
use crate::store::StoreHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Handle to the shared mood document
    pub store: Arc<StoreHandle>,
    /// Entry lifecycle operations
    pub journal: Arc<MoodJournal>,
    /// Derived-statistics operations
    pub analytics: Arc<MoodAnalytics>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over a store handle with default collaborators
    pub fn new(store: Arc<StoreHandle>, config: ApiConfig) -> Self {
        let journal = Arc::new(MoodJournal::new(Arc::clone(&store)));
        let analytics = Arc::new(MoodAnalytics::new(Arc::clone(&store)));
        Self::with_components(store, journal, analytics, config)
    }

    /// Create AppState with explicit collaborators (custom clock or id
    /// generator for tests)
    pub fn with_components(
        store: Arc<StoreHandle>,
        journal: Arc<MoodJournal>,
        analytics: Arc<MoodAnalytics>,
        config: ApiConfig,
    ) -> Self {
        Self {
            store,
            journal,
            analytics,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
