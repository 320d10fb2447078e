// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform Registry
//!
//! A fixed table of social platforms with profile URL templates.
//! This enables generating clickable profile links from handles.

use serde::{Deserialize, Serialize};

/// A social/contact platform with a fixed profile URL template.
///
/// The set is closed: adding a platform means adding a variant, which
/// forces every match in the crate to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Github,
    Vkontakte,
    Telegram,
    Email,
    Linkedin,
    Instagram,
    Line,
    Facebook,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
    Medium,
    Dev,
}

impl Platform {
    /// Every platform, in template-table order.
    pub const ALL: [Platform; 16] = [
        Platform::Twitter,
        Platform::Github,
        Platform::Vkontakte,
        Platform::Telegram,
        Platform::Email,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Line,
        Platform::Facebook,
        Platform::Gitlab,
        Platform::Weibo,
        Platform::Codepen,
        Platform::Youtube,
        Platform::Soundcloud,
        Platform::Medium,
        Platform::Dev,
    ];

    /// Returns the platform's tag as it appears in site configuration.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Github => "github",
            Platform::Vkontakte => "vkontakte",
            Platform::Telegram => "telegram",
            Platform::Email => "email",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Line => "line",
            Platform::Facebook => "facebook",
            Platform::Gitlab => "gitlab",
            Platform::Weibo => "weibo",
            Platform::Codepen => "codepen",
            Platform::Youtube => "youtube",
            Platform::Soundcloud => "soundcloud",
            Platform::Medium => "medium",
            Platform::Dev => "dev",
        }
    }

    /// Parses a configuration tag into a platform.
    ///
    /// The match is exact and case-sensitive ("Twitter" is not a known
    /// tag). Returns `None` for anything outside the fixed set, which is
    /// the loud alternative to [`contact_href`]'s silent pass-through.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "twitter" => Some(Platform::Twitter),
            "github" => Some(Platform::Github),
            "vkontakte" => Some(Platform::Vkontakte),
            "telegram" => Some(Platform::Telegram),
            "email" => Some(Platform::Email),
            "linkedin" => Some(Platform::Linkedin),
            "instagram" => Some(Platform::Instagram),
            "line" => Some(Platform::Line),
            "facebook" => Some(Platform::Facebook),
            "gitlab" => Some(Platform::Gitlab),
            "weibo" => Some(Platform::Weibo),
            "codepen" => Some(Platform::Codepen),
            "youtube" => Some(Platform::Youtube),
            "soundcloud" => Some(Platform::Soundcloud),
            "medium" => Some(Platform::Medium),
            "dev" => Some(Platform::Dev),
            _ => None,
        }
    }

    /// Human-readable display name (e.g. for link titles).
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Github => "GitHub",
            Platform::Vkontakte => "VKontakte",
            Platform::Telegram => "Telegram",
            Platform::Email => "Email",
            Platform::Linkedin => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Line => "LINE",
            Platform::Facebook => "Facebook",
            Platform::Gitlab => "GitLab",
            Platform::Weibo => "Weibo",
            Platform::Codepen => "CodePen",
            Platform::Youtube => "YouTube",
            Platform::Soundcloud => "SoundCloud",
            Platform::Medium => "Medium",
            Platform::Dev => "DEV",
        }
    }

    /// URL template with a `{handle}` placeholder.
    pub fn url_template(&self) -> &'static str {
        match self {
            Platform::Twitter => "https://twitter.com/{handle}",
            Platform::Github => "https://github.com/{handle}",
            Platform::Vkontakte => "https://vk.com/{handle}",
            Platform::Telegram => "https://t.me/{handle}",
            Platform::Email => "mailto:{handle}",
            Platform::Linkedin => "https://linkedin.com/in/{handle}",
            Platform::Instagram => "https://instagram.com/{handle}",
            Platform::Line => "line://ti/p/{handle}",
            Platform::Facebook => "https://facebook.com/{handle}",
            Platform::Gitlab => "https://gitlab.com/{handle}",
            Platform::Weibo => "https://weibo.com/{handle}",
            Platform::Codepen => "https://codepen.io/{handle}",
            Platform::Youtube => "https://youtube.com/channel/{handle}",
            Platform::Soundcloud => "https://soundcloud.com/{handle}",
            Platform::Medium => "https://{handle}.medium.com",
            Platform::Dev => "https://dev.to/{handle}",
        }
    }

    /// Generates a profile URL from a handle.
    ///
    /// The handle is substituted verbatim: no trimming, no `@`-stripping,
    /// no URL-encoding. Callers supply handles as they should appear in
    /// the link.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinta_core::social::Platform;
    ///
    /// assert_eq!(Platform::Github.href("alice"), "https://github.com/alice");
    /// assert_eq!(Platform::Medium.href("alice"), "https://alice.medium.com");
    /// ```
    pub fn href(&self, handle: &str) -> String {
        self.url_template().replace("{handle}", handle)
    }
}

/// Resolves a (platform tag, handle) pair into a link string.
///
/// Total over its input domain: a tag outside the fixed platform set
/// (including the empty string and the `rss` key present in site
/// configuration) returns the handle unchanged rather than an error.
/// A typoed tag therefore degrades to a broken link instead of failing
/// loudly; use [`Platform::from_tag`] where a miss should be observable.
///
/// # Examples
///
/// ```
/// use tinta_core::social::contact_href;
///
/// assert_eq!(contact_href("twitter", "alice"), "https://twitter.com/alice");
/// assert_eq!(contact_href("mastodon", "alice"), "alice");
/// ```
pub fn contact_href(name: &str, handle: &str) -> String {
    match Platform::from_tag(name) {
        Some(platform) => platform.href(handle),
        None => handle.to_string(),
    }
}
