// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact-Link Resolver Tests
//!
//! Covers the full platform template table, the identity fallback,
//! and the resolver's idempotence and determinism guarantees.

use tinta_core::social::{contact_href, Platform};

// ============================================================
// Template table
// ============================================================

#[test]
fn test_full_template_table() {
    let cases = [
        ("twitter", "https://twitter.com/vcpablo"),
        ("github", "https://github.com/vcpablo"),
        ("vkontakte", "https://vk.com/vcpablo"),
        ("telegram", "https://t.me/vcpablo"),
        ("linkedin", "https://linkedin.com/in/vcpablo"),
        ("instagram", "https://instagram.com/vcpablo"),
        ("facebook", "https://facebook.com/vcpablo"),
        ("gitlab", "https://gitlab.com/vcpablo"),
        ("weibo", "https://weibo.com/vcpablo"),
        ("codepen", "https://codepen.io/vcpablo"),
        ("youtube", "https://youtube.com/channel/vcpablo"),
        ("soundcloud", "https://soundcloud.com/vcpablo"),
        ("dev", "https://dev.to/vcpablo"),
    ];
    for (tag, expected) in cases {
        assert_eq!(contact_href(tag, "vcpablo"), expected, "tag {tag}");
    }
}

#[test]
fn test_email_uses_mailto_scheme() {
    assert_eq!(
        contact_href("email", "vcpablo@gmail.com"),
        "mailto:vcpablo@gmail.com"
    );
}

#[test]
fn test_line_uses_app_uri_scheme() {
    assert_eq!(contact_href("line", "myid"), "line://ti/p/myid");
}

#[test]
fn test_medium_handle_is_subdomain() {
    assert_eq!(contact_href("medium", "vcpablo"), "https://vcpablo.medium.com");
}

// ============================================================
// Handle substitution is verbatim
// ============================================================

#[test]
fn test_no_trimming() {
    assert_eq!(contact_href("github", " alice "), "https://github.com/ alice ");
}

#[test]
fn test_no_at_stripping() {
    assert_eq!(contact_href("twitter", "@alice"), "https://twitter.com/@alice");
}

#[test]
fn test_no_url_encoding() {
    assert_eq!(
        contact_href("github", "a/b c"),
        "https://github.com/a/b c"
    );
}

#[test]
fn test_empty_handle_still_substitutes() {
    assert_eq!(contact_href("github", ""), "https://github.com/");
    assert_eq!(contact_href("medium", ""), "https://.medium.com");
}

// ============================================================
// Identity fallback for unknown platforms
// ============================================================

#[test]
fn test_unknown_platform_returns_handle() {
    assert_eq!(contact_href("mastodon", "foo"), "foo");
}

#[test]
fn test_empty_platform_returns_handle() {
    assert_eq!(contact_href("", "foo"), "foo");
}

#[test]
fn test_rss_has_no_template() {
    // Present in the config wire format, absent from the table.
    assert_eq!(contact_href("rss", "/feed.xml"), "/feed.xml");
}

#[test]
fn test_match_is_case_sensitive() {
    assert_eq!(contact_href("Twitter", "alice"), "alice");
    assert_eq!(contact_href("GITHUB", "alice"), "alice");
}

#[test]
fn test_fallback_preserves_full_urls() {
    assert_eq!(
        contact_href("homepage", "https://example.com/me"),
        "https://example.com/me"
    );
}

// ============================================================
// Idempotence and determinism
// ============================================================

#[test]
fn test_fallback_is_idempotent() {
    let once = contact_href("mastodon", "foo");
    let twice = contact_href("mastodon", &once);
    assert_eq!(once, twice);
}

#[test]
fn test_resolved_link_is_stable_under_fallback() {
    let resolved = contact_href("github", "vcpablo");
    assert_eq!(contact_href("not-a-platform", &resolved), resolved);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    for _ in 0..3 {
        assert_eq!(contact_href("github", "vcpablo"), "https://github.com/vcpablo");
        assert_eq!(contact_href("unknown", "x"), "x");
    }
}

// ============================================================
// Typed platform API
// ============================================================

#[test]
fn test_typed_href_matches_string_resolver() {
    for platform in Platform::ALL {
        assert_eq!(platform.href("handle"), contact_href(platform.tag(), "handle"));
    }
}

#[test]
fn test_from_tag_covers_exactly_the_table() {
    assert_eq!(Platform::ALL.len(), 16);
    for platform in Platform::ALL {
        assert!(Platform::from_tag(platform.tag()).is_some());
    }
    assert!(Platform::from_tag("rss").is_none());
    assert!(Platform::from_tag("mastodon").is_none());
}
