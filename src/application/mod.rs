//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::form_service::FormService`] - Form editing and batch submission
//! - [`services::stats_service::StatsService`] - Mock analytics with simulated refresh
//! - [`services::theme_service::ThemeService`] - Process-wide light/dark theme

pub mod services;
