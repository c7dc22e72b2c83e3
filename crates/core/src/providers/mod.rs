pub mod traits;

// API provider implementations
pub mod fees_api;
