//! Application configuration

mod app_config;

pub use app_config::{AppConfig, ArtifactsConfig, LogFormat, LoggingConfig, ServerConfig};
