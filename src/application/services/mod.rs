//! Business logic services for the application layer.

pub mod form_service;
pub mod stats_service;
pub mod theme_service;

pub use form_service::{EntryInput, FieldEdit, FormService, SubmitOutcome};
pub use stats_service::StatsService;
pub use theme_service::ThemeService;
