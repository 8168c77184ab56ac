// src/cells/validator.rs
//! Soft validation of typed cell text against a column type.
//! Rejections never block typing; callers tint the cell and revert on commit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::column_type::ColumnType;
use super::formatter::{parse_canonical_amount, parse_loose_amount};

pub const DEFAULT_CURRENCY_PREFIX: &str = "Lps";

/// Why a committed cell value was refused. The message doubles as the cell tooltip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellRejection {
    #[error("'{0}' is not a whole number.")]
    NotAnInteger(String),
    #[error("'{0}' is not a number.")]
    NotADecimal(String),
    #[error("'{0}' is not a currency amount.")]
    NotACurrency(String),
    #[error("'{value}' is not a date: {reason}.")]
    InvalidDate { value: String, reason: &'static str },
}

/// Validation and formatting rules for cell values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRules {
    pub currency_prefix: String,
}

impl Default for CellRules {
    fn default() -> Self {
        Self {
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl CellRules {
    pub fn with_currency_prefix(prefix: impl Into<String>) -> Self {
        Self {
            currency_prefix: prefix.into(),
        }
    }

    pub fn is_valid(&self, column_type: ColumnType, raw: &str) -> bool {
        self.validate(column_type, raw).is_ok()
    }

    /// Checks `raw` against `column_type`. Blank text is always accepted.
    pub fn validate(&self, column_type: ColumnType, raw: &str) -> Result<(), CellRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        match column_type {
            ColumnType::Integer => trimmed
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| CellRejection::NotAnInteger(trimmed.to_string())),
            ColumnType::Decimal => parse_decimal(trimmed)
                .map(|_| ())
                .ok_or_else(|| CellRejection::NotADecimal(trimmed.to_string())),
            ColumnType::Currency => {
                let accepted = match self.strip_currency_prefix(trimmed) {
                    Some(rest) => parse_canonical_amount(rest).is_some(),
                    // Must also fit the fixed-point amount the formatter renders.
                    None => parse_decimal(trimmed).is_some() && parse_loose_amount(trimmed).is_some(),
                };
                if accepted {
                    Ok(())
                } else {
                    Err(CellRejection::NotACurrency(trimmed.to_string()))
                }
            }
            ColumnType::Date => parse_date(trimmed)
                .map(|_| ())
                .map_err(|reason| CellRejection::InvalidDate {
                    value: trimmed.to_string(),
                    reason,
                }),
            ColumnType::Boolean | ColumnType::Text => Ok(()),
        }
    }

    /// Validates and, on success, returns the display form to store in the cell.
    pub fn commit_value(&self, column_type: ColumnType, raw: &str) -> Result<String, CellRejection> {
        self.validate(column_type, raw)?;
        Ok(self.format(column_type, raw))
    }

    /// Returns the text after the currency prefix, if `text` carries it.
    pub(crate) fn strip_currency_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.currency_prefix.is_empty() {
            return None;
        }
        text.strip_prefix(self.currency_prefix.as_str())
            .map(str::trim_start)
    }
}

/// Parses a plain number with either ',' or '.' as decimal separator.
/// Alphabetic forms accepted by `f64::from_str` (inf, NaN, exponents) are refused.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.chars().any(char::is_alphabetic) {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses `dd<sep>MM<sep>yyyy` or `dd<sep>MM<sep>yy` where `sep` is exactly one of '/' or '-'.
pub fn parse_date(text: &str) -> Result<NaiveDate, &'static str> {
    let text = text.trim();
    let separator = match (text.contains('/'), text.contains('-')) {
        (true, false) => '/',
        (false, true) => '-',
        (true, true) => return Err("mixes '/' and '-' separators"),
        (false, false) => return Err("expected '/' or '-' between day, month and year"),
    };

    let parts: Vec<&str> = text.split(separator).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err("expected exactly three parts");
    };

    if !is_short_number(day) || !is_short_number(month) {
        return Err("day and month need one or two digits");
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err("year must be numeric");
    }
    let year: i32 = match year.len() {
        4 => year.parse().map_err(|_| "year must be numeric")?,
        2 => {
            let yy: i32 = year.parse().map_err(|_| "year must be numeric")?;
            if yy < 69 { 2000 + yy } else { 1900 + yy }
        }
        _ => return Err("year needs two or four digits"),
    };

    let day: u32 = day.parse().map_err(|_| "day must be numeric")?;
    let month: u32 = month.parse().map_err(|_| "month must be numeric")?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or("no such calendar date")
}

fn is_short_number(part: &str) -> bool {
    (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> CellRules {
        CellRules::default()
    }

    #[test]
    fn empty_is_valid_for_every_type() {
        for column_type in ColumnType::ALL {
            assert!(rules().is_valid(column_type, ""), "{column_type} rejected empty text");
            assert!(rules().is_valid(column_type, "   "));
        }
    }

    #[test]
    fn integers() {
        let r = rules();
        for ok in ["0", "42", "-7", "  15 ", "+3", "9223372036854775807"] {
            assert!(r.is_valid(ColumnType::Integer, ok), "{ok}");
        }
        for bad in ["4.2", "12a", "--1", "1 000", "abc", "9223372036854775808"] {
            assert!(!r.is_valid(ColumnType::Integer, bad), "{bad}");
        }
    }

    #[test]
    fn decimals_accept_comma_or_dot() {
        let r = rules();
        assert!(r.is_valid(ColumnType::Decimal, "3.14"));
        assert!(r.is_valid(ColumnType::Decimal, "3,14"));
        assert!(r.is_valid(ColumnType::Decimal, "-0.5"));
        assert!(!r.is_valid(ColumnType::Decimal, "1,500.25"));
        assert!(!r.is_valid(ColumnType::Decimal, "inf"));
        assert!(!r.is_valid(ColumnType::Decimal, "NaN"));
        assert!(!r.is_valid(ColumnType::Decimal, "1e5"));
    }

    #[test]
    fn currency_accepts_plain_and_formatted_amounts() {
        let r = rules();
        assert!(r.is_valid(ColumnType::Currency, "1500"));
        assert!(r.is_valid(ColumnType::Currency, "1500,50"));
        assert!(r.is_valid(ColumnType::Currency, "Lps 1,500.00"));
        assert!(r.is_valid(ColumnType::Currency, "Lps -20.10"));
        assert!(!r.is_valid(ColumnType::Currency, "abc"));
        assert!(!r.is_valid(ColumnType::Currency, "Lps abc"));
    }

    #[test]
    fn currency_too_large_to_format_is_rejected() {
        let r = rules();
        let huge = format!("1{}", "0".repeat(40));
        assert!(r.is_valid(ColumnType::Decimal, &huge));
        assert!(!r.is_valid(ColumnType::Currency, &huge));
        assert!(r.commit_value(ColumnType::Currency, &huge).is_err());

        let large = format!("1{}", "0".repeat(30));
        let formatted = r.commit_value(ColumnType::Currency, &large).unwrap();
        assert!(formatted.starts_with("Lps 1,000,000,"));
        assert!(formatted.ends_with(".00"));
    }

    #[test]
    fn dates() {
        let r = rules();
        for ok in ["15-08-24", "15/08/2024", "1/2/2020", "29-02-2024"] {
            assert!(r.is_valid(ColumnType::Date, ok), "{ok}");
        }
        for bad in [
            "2024-08-15-extra",
            "15-08/2024",
            "15.08.2024",
            "31-02-2024",
            "15-08-202",
            "15-aa-2024",
            "2024-08-15",
        ] {
            assert!(!r.is_valid(ColumnType::Date, bad), "{bad}");
        }
    }

    #[test]
    fn two_digit_years_follow_chrono_century_split() {
        assert_eq!(parse_date("15-08-24").unwrap(), NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
        assert_eq!(parse_date("01/01/85").unwrap(), NaiveDate::from_ymd_opt(1985, 1, 1).unwrap());
        assert_eq!(parse_date("01-01-68").unwrap(), NaiveDate::from_ymd_opt(2068, 1, 1).unwrap());
        assert_eq!(parse_date("01-01-69").unwrap(), NaiveDate::from_ymd_opt(1969, 1, 1).unwrap());
        assert_eq!(parse_date("01-01-70").unwrap(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(parse_date("31/12/00").unwrap(), NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
    }

    #[test]
    fn boolean_and_text_accept_anything() {
        assert!(rules().is_valid(ColumnType::Boolean, "maybe"));
        assert!(rules().is_valid(ColumnType::Text, "¿lo que sea?"));
    }

    #[test]
    fn rejection_messages_name_the_value() {
        let err = rules().validate(ColumnType::Integer, " 12x ").unwrap_err();
        assert_eq!(err.to_string(), "'12x' is not a whole number.");
        let err = rules().validate(ColumnType::Date, "2024-08-15-extra").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'2024-08-15-extra' is not a date: expected exactly three parts."
        );
    }

    #[test]
    fn commit_value_formats_on_success() {
        let r = rules();
        assert_eq!(r.commit_value(ColumnType::Date, "15/08/2024").unwrap(), "15-08-2024");
        assert_eq!(r.commit_value(ColumnType::Currency, "1500").unwrap(), "Lps 1,500.00");
        assert!(r.commit_value(ColumnType::Integer, "x").is_err());
    }
}
