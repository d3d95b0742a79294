//! Localized date parsing
//!
//! Monday.com exports dates as `DD-<month>-YYYY`, where the month token follows
//! the exporting account's language (`05-janv.-2026`, `05-Jan-2026`). The month
//! lookup is a plain value passed to [`DateParser`], so another language can be
//! plugged in without touching the extractor or the chart code.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Month token lookup for one language.
///
/// Tokens are matched case-insensitively and a trailing `.` is ignored, so
/// `janv.`, `Janv` and `JANV.` all resolve to January.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames {
    entries: Vec<(String, u32)>,
}

impl MonthNames {
    /// Build a month table from `(token, month)` pairs, month being 1-12.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut table = Vec::new();
        for (token, month) in entries {
            let token = token.into();
            if !(1..=12).contains(&month) {
                return Err(Error::InvalidMonth { token, month });
            }
            let key = normalize_token(&token);
            if key.is_empty() {
                return Err(Error::EmptyMonthToken);
            }
            table.push((key, month));
        }
        Ok(Self { entries: table })
    }

    /// French month names as written by Monday.com (`janv.` ... `déc.`),
    /// plus the unabbreviated forms.
    pub fn french() -> Self {
        Self::from_static(&[
            ("janv.", 1),
            ("janvier", 1),
            ("févr.", 2),
            ("février", 2),
            ("mars", 3),
            ("avr.", 4),
            ("avril", 4),
            ("mai", 5),
            ("juin", 6),
            ("juil.", 7),
            ("juillet", 7),
            ("août", 8),
            ("sept.", 9),
            ("septembre", 9),
            ("oct.", 10),
            ("octobre", 10),
            ("nov.", 11),
            ("novembre", 11),
            ("déc.", 12),
            ("décembre", 12),
        ])
    }

    /// English month abbreviations and full names.
    pub fn english() -> Self {
        Self::from_static(&[
            ("jan", 1),
            ("january", 1),
            ("feb", 2),
            ("february", 2),
            ("mar", 3),
            ("march", 3),
            ("apr", 4),
            ("april", 4),
            ("may", 5),
            ("jun", 6),
            ("june", 6),
            ("jul", 7),
            ("july", 7),
            ("aug", 8),
            ("august", 8),
            ("sep", 9),
            ("sept", 9),
            ("september", 9),
            ("oct", 10),
            ("october", 10),
            ("nov", 11),
            ("november", 11),
            ("dec", 12),
            ("december", 12),
        ])
    }

    /// Look up a built-in table by language code (`fr`, `en`).
    pub fn by_code(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "fr" | "french" => Ok(Self::french()),
            "en" | "english" => Ok(Self::english()),
            other => Err(Error::UnknownLocale(other.to_string())),
        }
    }

    /// Resolve a month token to its month number (1-12).
    pub fn month(&self, token: &str) -> Option<u32> {
        let key = normalize_token(token);
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, month)| *month)
    }

    /// Number of tokens in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no tokens
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_static(entries: &[(&str, u32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(token, month)| (normalize_token(token), *month))
                .collect(),
        }
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().trim_end_matches('.').to_lowercase()
}

/// A parsed date together with the tokens it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    /// Calendar date
    pub date: NaiveDate,
    /// Day token as written (`05`)
    pub day: String,
    /// Month token as written (`janv.`)
    pub month: String,
}

impl ParsedDate {
    /// Short label in `<month> <day>` form, using the source tokens.
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.day)
    }
}

/// Parser for `DD-<month>-YYYY` dates.
///
/// Month tables are tried in order; the first table that knows the token
/// wins. The default parser accepts French and English month names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    locales: Vec<MonthNames>,
}

impl DateParser {
    /// Create a parser over the given month tables
    pub fn new(locales: Vec<MonthNames>) -> Self {
        Self { locales }
    }

    /// Create a parser for a single month table
    pub fn with_locale(locale: MonthNames) -> Self {
        Self::new(vec![locale])
    }

    /// Month tables in lookup order
    pub fn locales(&self) -> &[MonthNames] {
        &self.locales
    }

    /// Parse a date string, returning `None` when it does not match the
    /// expected shape, uses an unknown month, or names a day that does not exist.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        self.parse_parts(text).map(|parsed| parsed.date)
    }

    /// Parse a date string and keep the source day/month tokens.
    pub fn parse_parts(&self, text: &str) -> Option<ParsedDate> {
        let parts: Vec<&str> = text.trim().split('-').collect();
        let [day_token, month_token, year_token] = parts.as_slice() else {
            return None;
        };

        let day = parse_digits(day_token, 1..=2)?;
        let year = parse_digits(year_token, 4..=4)?;
        let month = self
            .locales
            .iter()
            .find_map(|locale| locale.month(month_token))?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
        Some(ParsedDate {
            date,
            day: day_token.trim().to_string(),
            month: month_token.trim().to_string(),
        })
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new(vec![MonthNames::french(), MonthNames::english()])
    }
}

fn parse_digits(token: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    let token = token.trim();
    if !len.contains(&token.len()) || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
