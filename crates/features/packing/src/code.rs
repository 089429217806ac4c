//! # Pallet codes
//!
//! A pallet code is a fixed-layout identifier stamped on a pallet when it is created:
//!
//! ```text
//!  D  WW  YY  S  CC  F  KK
//!  │   │   │  │   │  │   └─ company, zero-padded to 2
//!  │   │   │  │   │  └───── packaging format id
//!  │   │   │  │   └──────── caliber
//!  │   │   │  └──────────── shift
//!  │   │   └─────────────── calendar year of the date, mod 100
//!  │   └─────────────────── ISO-8601 week number, zero-padded
//!  └─────────────────────── ISO day of week, Monday = 1 … Sunday = 7
//! ```
//!
//! The year field comes from the calendar date, not from the ISO week-year. On boundary
//! weeks the two disagree (2023-01-01 encodes week `52` with year `23`). Stored codes
//! already carry that layout, so it is kept as is.
//!
//! Shift, caliber, format and company are concatenated untouched: validating them is the
//! caller's job. Codes are write-only here and consumed elsewhere as opaque identifiers.

use chrono::{Datelike, Local};
use serde::Serialize;
use std::fmt::{self, Display};
use std::ops::Deref;

/// An encoded pallet identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PalletCode(String);

impl PalletCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PalletCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PalletCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PalletCode {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Encodes a pallet code for `date`.
///
/// Accepts any calendar type (`NaiveDate`, `DateTime<Local>`, ...). Pure and infallible.
///
/// ```rust
/// use chrono::NaiveDate;
/// use packhub_packing::code::generate_code;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(generate_code(date, "1", "12", "3", "5").as_str(), "10124112305");
/// ```
#[must_use]
pub fn generate_code<D>(
    date: D,
    shift: &str,
    caliber: &str,
    format_id: &str,
    company: &str,
) -> PalletCode
where
    D: Datelike,
{
    let day = date.weekday().number_from_monday();
    let week = date.iso_week().week();
    let year = date.year().rem_euclid(100);

    PalletCode(format!("{day}{week:02}{year:02}{shift}{caliber}{format_id}{company:0>2}"))
}

/// Encodes a pallet code for today's local date.
#[must_use]
pub fn generate_code_today(
    shift: &str,
    caliber: &str,
    format_id: &str,
    company: &str,
) -> PalletCode {
    generate_code(Local::now().date_naive(), shift, caliber, format_id, company)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_of_first_week() {
        let code = generate_code(date(2024, 1, 1), "1", "12", "3", "5");
        assert_eq!(&code[..1], "1");
        assert_eq!(&code[1..3], "01");
        assert_eq!(&code[3..5], "24");
        assert_eq!(code.as_str(), "10124112305");
    }

    #[test]
    fn sunday_in_previous_iso_year_keeps_calendar_year() {
        let code = generate_code(date(2023, 1, 1), "2", "08", "1", "12");
        assert_eq!(&code[..1], "7");
        assert_eq!(&code[1..3], "52");
        assert_eq!(&code[3..5], "23");
        assert_eq!(code.as_str(), "75223208112");
    }

    #[test]
    fn late_december_can_be_week_one() {
        // 2024-12-30 is the Monday of ISO week 1 of 2025.
        let code = generate_code(date(2024, 12, 30), "1", "12", "3", "05");
        assert_eq!(code.as_str(), "10124112305");
    }

    #[test]
    fn week_fifty_three() {
        // 2020-12-31 is a Thursday in ISO week 53.
        let code = generate_code(date(2020, 12, 31), "1", "12", "3", "05");
        assert_eq!(&code[..5], "45320");
    }

    #[test]
    fn company_padding() {
        let d = date(2024, 3, 6);
        assert!(generate_code(d, "1", "12", "3", "5").ends_with("05"));
        assert!(generate_code(d, "1", "12", "3", "12").ends_with("12"));
        assert!(generate_code(d, "1", "12", "3", "").ends_with("300"));
        assert!(generate_code(d, "1", "12", "3", "123").ends_with("3123"));
    }

    #[test]
    fn year_two_thousand_pads_to_two_digits() {
        let code = generate_code(date(2000, 6, 15), "1", "12", "3", "05");
        assert_eq!(&code[3..5], "00");
    }

    #[test]
    fn serializes_transparently() {
        let code = generate_code(date(2024, 1, 1), "1", "12", "3", "5");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""10124112305""#);
        assert_eq!(code.to_string(), code.clone().into_inner());
    }
}
