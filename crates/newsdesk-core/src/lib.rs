//! Shared configuration for the newsdesk workspace.
//!
//! Holds the env-driven [`AppConfig`], the read-only [`FeedRegistry`] of
//! syndicated sources, and the presentation-only [`LayoutMode`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod feeds;

pub use app_config::{AppConfig, LayoutMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use feeds::{load_feeds, load_registry, FeedEntry, FeedRegistry};
