//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`session`] - In-memory form session storage
//! - [`catalog`] - Fixed demo analytics

pub mod catalog;
pub mod session;
