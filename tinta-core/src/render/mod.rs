// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presentational Components
//!
//! Small HTML fragments the site generator embeds into post pages.
//! These are maud functions returning `Markup` for composition into
//! full pages; layout and styling live with the surrounding site.

mod author;
mod meta;

pub use author::author_bio;
pub use meta::{parse_post_date, post_meta};
