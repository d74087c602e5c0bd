//! Utility modules for the backend.

/// Application configuration.
pub mod config;
/// Application directory and file paths.
pub mod paths;
