//! API route handlers organized by resource

pub mod entries;
pub mod health;
pub mod recommend;
pub mod summary;
pub mod trend;
