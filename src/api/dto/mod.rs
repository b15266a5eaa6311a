//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; batch requests
//! are bounded with `validator`.

pub mod health;
pub mod shorten;
pub mod stats;
pub mod validate;
