//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{FormService, StatsService, ThemeService};
use crate::config::Config;
use crate::infrastructure::catalog::StaticStatsRepository;
use crate::infrastructure::session::InMemorySessionStore;

#[derive(Clone)]
pub struct AppState {
    pub form_service: Arc<FormService<InMemorySessionStore>>,
    pub stats_service: Arc<StatsService<StaticStatsRepository>>,
    pub theme_service: Arc<ThemeService>,
    pub sessions: Arc<InMemorySessionStore>,
}

impl AppState {
    /// Wires services from configuration and the given stores.
    pub fn new(
        config: &Config,
        sessions: Arc<InMemorySessionStore>,
        stats_repository: Arc<StaticStatsRepository>,
    ) -> Self {
        let form_service = Arc::new(FormService::new(
            sessions.clone(),
            config.short_link_base.clone(),
            config.submit_delay(),
        ));
        let stats_service = Arc::new(StatsService::new(
            stats_repository,
            config.refresh_delay(),
        ));
        let theme_service = Arc::new(ThemeService::new(config.default_theme));

        Self {
            form_service,
            stats_service,
            theme_service,
            sessions,
        }
    }
}
