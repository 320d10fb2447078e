// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tinta Core Library
//!
//! Site metadata and view glue for a personal blog: an immutable site
//! configuration loaded once at startup, a contact-link resolver mapping
//! social platforms to profile URLs, and the small HTML fragments the
//! surrounding site generator embeds into pages.

pub mod config;
pub mod locale;
pub mod render;
pub mod social;

pub use config::{Author, ConfigError, Contacts, MenuItem, SiteConfig};
pub use locale::Locale;
pub use render::{author_bio, parse_post_date, post_meta};
pub use social::{contact_href, Platform};
