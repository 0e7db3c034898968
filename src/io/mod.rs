//! Input/output operations, configuration and error handling

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and run configuration
pub mod configuration;
/// Cosmetic gap-filling filter for snapshots
pub mod embellish;
/// Error types
pub mod error;
/// Numbered PNG snapshots
pub mod image;
/// Progress display
pub mod progress;
/// Seed layouts from presets or images
pub mod seeds;
/// Animated GIF recording
pub mod visualization;
