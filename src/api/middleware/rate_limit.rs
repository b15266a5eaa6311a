//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build<K: KeyExtractor>(key_extractor: K, per_second: u64, burst_size: u32) -> RateLimitLayer<K> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for page reads and the health check.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer<K: KeyExtractor>(key_extractor: K) -> RateLimitLayer<K> {
    build(key_extractor, 2, 100)
}

/// Stricter rate limiter for form actions and the JSON API.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
pub fn secure_layer<K: KeyExtractor>(key_extractor: K) -> RateLimitLayer<K> {
    build(key_extractor, 1, 10)
}

/// Wraps a router in a per-IP rate limiter.
///
/// With `behind_proxy` the client IP comes from `X-Forwarded-For` /
/// `X-Real-IP` / `Forwarded`, otherwise from the peer socket address, which
/// requires serving with `into_make_service_with_connect_info`.
pub fn apply(router: Router<AppState>, behind_proxy: bool, secure: bool) -> Router<AppState> {
    match (behind_proxy, secure) {
        (true, true) => router.layer(secure_layer(SmartIpKeyExtractor)),
        (true, false) => router.layer(layer(SmartIpKeyExtractor)),
        (false, true) => router.layer(secure_layer(PeerIpKeyExtractor)),
        (false, false) => router.layer(layer(PeerIpKeyExtractor)),
    }
}
