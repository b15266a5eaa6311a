//! Domain layer containing entities, form rules and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`form`] - Bounded batch form and submission rules
//! - [`session`] - Per-browser form session
//! - [`repositories`] - Data access trait definitions
//! - [`session_sweeper`] - Background eviction of idle sessions
//!
//! # Submission Flow
//!
//! 1. The web layer applies posted field values to the session's form
//! 2. [`form::ShortenerForm::prepare_batch`] fabricates results for valid entries
//! 3. The service pauses, then [`form::ShortenerForm::apply_results`] writes
//!    them back and the session's result list grows

pub mod entities;
pub mod form;
pub mod repositories;
pub mod session;
pub mod session_sweeper;
