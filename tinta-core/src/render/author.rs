// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Author bio block.

use maud::{html, Markup, PreEscaped};

use crate::config::Author;
use crate::locale::Locale;
use crate::social::contact_href;

/// Render the author bio block shown under each post.
///
/// The bio is a trusted HTML fragment from site configuration and is
/// injected unescaped; everything else goes through maud's escaping.
/// The trailing link points at the author's LinkedIn profile.
pub fn author_bio(author: &Author, locale: Locale) -> Markup {
    let linkedin_href = contact_href("linkedin", &author.contacts.linkedin);

    html! {
        div class="author" {
            p class="author__bio" {
                span { (PreEscaped(&author.bio)) }
                " "
                a class="author__bio-link"
                    href=(linkedin_href)
                    rel="noopener noreferrer"
                    target="_blank" {
                    strong { (author.name) } " " (locale.on_linkedin_label())
                }
            }
        }
    }
}
