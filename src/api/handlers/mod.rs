//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod shorten;
pub mod stats;
pub mod validate;

pub use health::health_handler;
pub use shorten::shorten_handler;
pub use stats::{stats_handler, stats_list_handler};
pub use validate::validate_handler;
