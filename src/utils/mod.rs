// Shared helpers (time conversion, small numeric utilities)
pub mod maths_utils;
pub mod time_utils;

// Re-export commonly used types
pub use time_utils::TimeUtils;
