// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Platform Support
//!
//! This module provides:
//! - A closed set of known social platforms with profile URL templates
//! - Resolution of (platform, handle) pairs into renderable link strings

mod platform;

pub use platform::{contact_href, Platform};
