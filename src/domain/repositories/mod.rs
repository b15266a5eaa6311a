//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for service tests.
//!
//! - [`SessionStore`] - Form sessions keyed by cookie
//! - [`StatsRepository`] - Link analytics records

pub mod session_store;
pub mod stats_repository;

pub use session_store::{SessionHandle, SessionStore};
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
