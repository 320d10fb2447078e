// SPDX-FileCopyrightText: 2026 Tinta Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale Support
//!
//! Localized date rendering and the fixed labels used by the
//! presentational components. The site ships in English and Brazilian
//! Portuguese; this is a closed formatting table, not a translation
//! system.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "pt-br")]
    Portuguese,
}

impl Locale {
    /// Get the BCP 47 language tag
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Portuguese => "pt-br",
        }
    }

    /// Parse a locale from its tag
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Locale::English),
            "pt" | "pt-br" | "pt-pt" => Some(Locale::Portuguese),
            _ => None,
        }
    }

    /// Abbreviated month name, 1-based.
    fn short_month(&self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        const PT: [&str; 12] = [
            "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
            "nov.", "dez.",
        ];
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::English => EN[index],
            Locale::Portuguese => PT[index],
        }
    }

    /// Formats a date the way the site's original meta line did:
    /// "Jan 15, 2023" in English, "15 de jan. de 2023" in Portuguese.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let month = self.short_month(date.month());
        match self {
            Locale::English => format!("{} {}, {}", month, date.day(), date.year()),
            Locale::Portuguese => {
                format!("{} de {} de {}", date.day(), month, date.year())
            }
        }
    }

    /// Label prefixing the post date line.
    pub fn published_label(&self) -> &'static str {
        match self {
            Locale::English => "Published on",
            Locale::Portuguese => "Publicado em",
        }
    }

    /// Suffix for the author bio's profile link ("{name} on LinkedIn").
    pub fn on_linkedin_label(&self) -> &'static str {
        match self {
            Locale::English => "on LinkedIn",
            Locale::Portuguese => "no LinkedIn",
        }
    }
}
