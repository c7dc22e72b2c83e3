pub mod chart;
pub mod dataset;
pub mod metrics;
pub mod selection;
