mod engine;
mod feed_stats;
mod route_stats;
mod stats_config;
mod stats_error;
pub mod stats_ops;
mod stats_request;
mod stop_stats;

pub use engine::StatsEngine;
pub use feed_stats::FeedStats;
pub use route_stats::{RouteStats, RouteStatsSummary};
pub use stats_config::StatsConfig;
pub use stats_error::StatsError;
pub use stats_request::StatsRequest;
pub use stop_stats::{StopStats, StopStatsSummary};
