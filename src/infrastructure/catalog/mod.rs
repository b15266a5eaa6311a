//! Statistics sources.

mod static_stats;

pub use static_stats::StaticStatsRepository;
