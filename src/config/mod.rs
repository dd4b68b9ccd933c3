//! Configuration module for the signals pipeline.

pub mod analysis;
pub mod binance;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use binance::BINANCE;
