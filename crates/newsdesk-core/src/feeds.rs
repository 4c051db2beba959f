use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A named syndicated source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Display name, e.g. `"CNN: Latest News"`.
    pub name: String,
    /// RSS/Atom URL. Reachability is never checked.
    pub url: String,
}

impl FeedEntry {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedsFile {
    feeds: Vec<FeedEntry>,
}

/// Ordered, read-only mapping from display name to feed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRegistry {
    entries: Vec<FeedEntry>,
}

impl FeedRegistry {
    /// Build a registry from entries, validating names and URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on an empty list, blank fields, or a
    /// case-insensitively duplicated name.
    pub fn new(entries: Vec<FeedEntry>) -> Result<Self, ConfigError> {
        validate_feeds(&entries)?;
        Ok(Self { entries })
    }

    /// The registry shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                FeedEntry::new(
                    "NPR: Business News",
                    "http://www.npr.org/rss/rss.php?id=1014",
                ),
                FeedEntry::new(
                    "NYT: Business News",
                    "http://www.nytimes.com/services/xml/rss/nyt/WorldBusiness.xml",
                ),
                FeedEntry::new(
                    "NYT: Politics",
                    "http://rss.nytimes.com/services/xml/rss/nyt/Politics.xml",
                ),
                FeedEntry::new(
                    "NYT: World Business",
                    "http://www.nytimes.com/services/xml/rss/nyt/WorldBusiness.xml",
                ),
                FeedEntry::new("AXIOS News", "http://www.axios.com/feeds/feed.rss"),
                FeedEntry::new("The Atlantic Newsfeed", "http://www.theatlantic.com/feed/all"),
                FeedEntry::new("CNN: Latest News", "http://rss.cnn.com/rss/edition.rss"),
                FeedEntry::new(
                    "CNBC: Latest News",
                    "https://www.cnbc.com/id/100003114/device/rss/rss.html",
                ),
                FeedEntry::new("Investing News", "https://www.investing.com/rss/news.rss"),
            ],
        }
    }

    /// Look up a feed by its exact display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeedEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// The feed selected when the caller names none: the first entry.
    #[must_use]
    pub fn default_entry(&self) -> &FeedEntry {
        // Non-empty: enforced by `new` and `builtin`.
        &self.entries[0]
    }

    /// Resolve an optional name, falling back to [`Self::default_entry`].
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> Option<&FeedEntry> {
        match name {
            Some(name) => self.get(name),
            None => Some(self.default_entry()),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// Load and validate a feed registry from a YAML file.
///
/// Expected shape:
///
/// ```yaml
/// feeds:
///   - name: "CNN: Latest News"
///     url: http://rss.cnn.com/rss/edition.rss
/// ```
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_feeds(path: &Path) -> Result<FeedRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeedsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let feeds_file: FeedsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::FeedsFileParse)?;

    FeedRegistry::new(feeds_file.feeds)
}

/// Load the registry from `path` when given, otherwise return the built-in one.
///
/// # Errors
///
/// Propagates [`load_feeds`] errors.
pub fn load_registry(path: Option<&Path>) -> Result<FeedRegistry, ConfigError> {
    match path {
        Some(path) => load_feeds(path),
        None => Ok(FeedRegistry::builtin()),
    }
}

fn validate_feeds(entries: &[FeedEntry]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one feed must be configured".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "feed name must be non-empty".to_string(),
            ));
        }

        if entry.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "feed '{}' has an empty url",
                entry.name
            )));
        }

        if !seen_names.insert(entry.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate feed name: '{}'",
                entry.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "feeds_test.rs"]
mod tests;
