pub mod chart_service;
pub mod metrics_service;
pub mod range_service;
pub mod ranking_service;
