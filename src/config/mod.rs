//! Configuration module for Painel CLI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (the published sheet link)

pub mod paths;
pub mod settings;

pub use paths::PainelPaths;
pub use settings::Settings;
