//! Configuration module for mailquote
//!
//! Holds the application configuration and path helpers used to locate it.

pub mod app_config;
pub mod path_resolver;

pub use app_config::AppConfig;
