// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Post metadata line.

use chrono::NaiveDate;
use maud::{html, Markup};

use crate::locale::Locale;

/// Render the publication date line shown at the top of a post.
pub fn post_meta(date: NaiveDate, locale: Locale) -> Markup {
    html! {
        div class="meta" {
            p class="meta__date" {
                (locale.published_label()) " " (locale.format_date(date))
            }
        }
    }
}

/// Parse the date string frontmatter supplies.
///
/// Accepts a bare `YYYY-MM-DD` or a full RFC 3339 timestamp, of which
/// only the date part is kept.
pub fn parse_post_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}
