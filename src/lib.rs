//! # URL Whisper
//!
//! A small URL shortener demo built with Axum and Askama. Users fill in up to
//! five URLs, each with an optional validity window and custom short code, and
//! get back fabricated short links. A statistics page shows mock click
//! analytics. Nothing is persisted.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Form rules, entities and repository traits
//! - **Application Layer** ([`application`]) - Services orchestrating sessions and catalogs
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory session store, demo catalog
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages and form actions
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_LINK_BASE="https://localhost:3000"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FormService, StatsService, ThemeService};
    pub use crate::domain::entities::{ShortenedResult, StatItem, Theme, UrlEntry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
