#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use url_whisper::config::Config;
use url_whisper::infrastructure::catalog::StaticStatsRepository;
use url_whisper::infrastructure::session::InMemorySessionStore;
use url_whisper::routes::web_router;
use url_whisper::state::AppState;

pub const BASE: &str = "https://localhost:3000";

/// Configuration with every simulated delay switched off.
pub fn test_config() -> Config {
    Config {
        submit_delay_ms: 0,
        refresh_delay_ms: 0,
        ..Config::default()
    }
}

pub fn create_test_state() -> AppState {
    let repository = StaticStatsRepository::seeded().unwrap();
    create_state_with(test_config(), repository)
}

pub fn create_empty_catalog_state() -> AppState {
    create_state_with(test_config(), StaticStatsRepository::new(Vec::new()))
}

pub fn create_state_with(config: Config, repository: StaticStatsRepository) -> AppState {
    let sessions = Arc::new(InMemorySessionStore::new(config.max_sessions));
    AppState::new(&config, sessions, Arc::new(repository))
}

/// HTML routes with the session middleware, without rate limiting.
pub fn web_app(state: AppState) -> Router {
    web_router().with_state(state)
}
