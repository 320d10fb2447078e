// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site Configuration
//!
//! The immutable configuration value the site generator loads once at
//! startup and passes down to rendering code. The JSON wire format mirrors
//! the site's `config` file: camelCase keys, contacts as a flat platform
//! tag → handle map with empty strings for unset handles.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::social::contact_href;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Site title cannot be empty")]
    EmptyTitle,
    #[error("Site url must be absolute (http:// or https://)")]
    RelativeUrl,
    #[error("postsPerPage must be at least 1")]
    ZeroPostsPerPage,
    #[error("Menu item {index} has an empty label or path")]
    EmptyMenuItem { index: usize },
}

/// A single entry in the site navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

/// The author's contact handles, one optional handle per platform.
///
/// Empty strings mean "not set"; the original site config lists every
/// platform explicitly and leaves unused ones blank. The `rss` key exists
/// on the wire but has no URL template, so resolving it falls through to
/// the handle itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
    pub medium: String,
    pub dev: String,
}

impl Contacts {
    /// Returns every (tag, handle) pair in wire order, including blanks.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("email", self.email.as_str()),
            ("facebook", self.facebook.as_str()),
            ("telegram", self.telegram.as_str()),
            ("twitter", self.twitter.as_str()),
            ("github", self.github.as_str()),
            ("rss", self.rss.as_str()),
            ("vkontakte", self.vkontakte.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
            ("line", self.line.as_str()),
            ("gitlab", self.gitlab.as_str()),
            ("weibo", self.weibo.as_str()),
            ("codepen", self.codepen.as_str()),
            ("youtube", self.youtube.as_str()),
            ("soundcloud", self.soundcloud.as_str()),
            ("medium", self.medium.as_str()),
            ("dev", self.dev.as_str()),
        ]
    }

    /// Returns the (tag, handle) pairs with a non-empty handle.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        self.entries()
            .into_iter()
            .filter(|(_, handle)| !handle.is_empty())
            .collect()
    }

    /// Returns the handle for a tag, or `None` for an unknown tag.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, handle)| handle)
    }

    /// Resolves every present contact into a (tag, link) pair.
    pub fn hrefs(&self) -> Vec<(&'static str, String)> {
        self.present()
            .into_iter()
            .map(|(tag, handle)| (tag, contact_href(tag, handle)))
            .collect()
    }
}

/// The author bio block data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub photo: String,
    /// Trusted HTML fragment, rendered unescaped.
    pub bio: String,
    #[serde(default)]
    pub contacts: Contacts,
}

/// Embedded default site configuration (loaded at compile time).
const SITE_JSON: &str = include_str!("site.json");

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub url: String,
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub disqus_shortname: String,
    pub posts_per_page: u32,
    #[serde(default)]
    pub google_analytics_id: String,
    #[serde(default)]
    pub use_katex: bool,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    pub author: Author,
}

fn default_path_prefix() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        serde_json::from_str(SITE_JSON).expect("Invalid embedded site.json")
    }
}

impl SiteConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks structural invariants beyond what the JSON schema captures.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::RelativeUrl);
        }
        if self.posts_per_page == 0 {
            return Err(ConfigError::ZeroPostsPerPage);
        }
        for (index, item) in self.menu.iter().enumerate() {
            if item.label.trim().is_empty() || item.path.trim().is_empty() {
                return Err(ConfigError::EmptyMenuItem { index });
            }
        }
        Ok(())
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
