//! Utility modules for common functionality
//!
//! Logging and progress reporting shared by the library and the CLI.

pub mod logger;
mod progress;

pub use self::progress::ProgressTracker;
