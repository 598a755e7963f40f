//! # Moodlog
//!
//! Mood journaling and analytics - a Rust service for logging per-user mood
//! entries and deriving summaries, trends, and recommendations.
//!
//! ## Features
//!
//! - **Entry lifecycle**: create, update, delete and read mood entries over
//!   a shared JSON document with whole-document persistence
//! - **Classification**: raw mood labels bucketed into coarse categories
//! - **Analytics**: average-mood heuristic, daily/weekly summaries, and a
//!   14-day trend signal
//! - **Recommendations**: coping strategies for 1-5 self-reported scores
//! - **REST API**: thin Axum layer over the engine
//!
//! ## Modules
//!
//! - [`store`]: the shared mood document and its single-writer handle
//! - [`classify`]: mood label classification
//! - [`journal`]: entry lifecycle operations
//! - [`analytics`]: derived statistics
//! - [`recommend`]: score-based recommendations
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodlog::journal::MoodJournal;
//! use moodlog::analytics::{average_mood, MoodAnalytics};
//! use moodlog::store::StoreHandle;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(StoreHandle::new("mood_log.json"));
//!     let journal = MoodJournal::new(Arc::clone(&store));
//!
//!     // Log an entry; the category is derived from the label
//!     let entry = journal.create("lea", "2026-08-20", "happy", "good day").await?;
//!     println!("Logged {} as {}", entry.mood, entry.mood_category);
//!
//!     // Derive the overall mood label from the full history
//!     let log = journal.read("lea").await?;
//!     println!("Average mood: {}", average_mood(&log));
//!
//!     // Date-bucketed analytics run against the same document
//!     let analytics = MoodAnalytics::new(store);
//!     if let Some(week) = analytics.weekly_summary("lea").await? {
//!         println!("Buckets: {}", week.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod classify;
pub mod config;
pub mod journal;
pub mod recommend;
pub mod store;

// Re-export top-level types for convenience
pub use classify::{classify, Category};

pub use store::{MoodEntry, MoodStore, StoreError, StoreHandle, StoreResult, UserLog};

pub use journal::{IdGenerator, JournalError, JournalResult, MoodJournal, UuidGenerator};

pub use analytics::{
    average_mood, detect_trend, AverageMood, Clock, DailySummary, DayBucket, MoodAnalytics,
    SystemClock, Trend, TrendOutcome, TrendReport, WeeklySummary,
};

pub use recommend::{recommend, Recommendation, RecommendError, ScoreBand};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, StoreConfig};
