//! Configuration module for fin
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinPaths;
pub use settings::Settings;
