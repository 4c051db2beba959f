use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Serialize;

/// How the excluded presentation layer arranges the view.
///
/// Only surfaces read this; the pipeline never branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Summary and word cloud in a side column next to the article list.
    #[default]
    Sidebar,
    /// Summary and word cloud stacked above the article list.
    Main,
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMode::Sidebar => write!(f, "sidebar"),
            LayoutMode::Main => write!(f, "main"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML feed registry. `None` selects the built-in registry.
    pub feeds_path: Option<PathBuf>,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub layout_mode: LayoutMode,
}
