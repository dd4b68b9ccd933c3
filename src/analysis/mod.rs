// Indicator passes and signal classification
pub mod indicators;
pub mod signals;

// Re-export commonly used types
pub use indicators::compute_indicator_set;
pub use signals::classify;
