// src/cells/formatter.rs
//! Canonical display forms for committed cell values.

use super::column_type::ColumnType;
use super::validator::{parse_date, CellRules};

/// Fixed-point amount in hundredths, used for currency rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Amount {
    negative: bool,
    cents: u128,
}

impl Amount {
    /// Builds an amount from integer and fractional digit strings.
    /// The fraction is rounded half-up to two places.
    fn from_digits(int_digits: &str, frac_digits: &str, negative: bool) -> Option<Self> {
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }
        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().ok()?
        };

        let frac = frac_digits.as_bytes();
        let digit = |i: usize| frac.get(i).map_or(0, |b| u128::from(b - b'0'));
        let mut cents = whole.checked_mul(100)?.checked_add(digit(0) * 10 + digit(1))?;
        if digit(2) >= 5 {
            cents = cents.checked_add(1)?;
        }

        Some(Self {
            negative: negative && cents != 0,
            cents,
        })
    }

    /// Ungrouped form without prefix, e.g. `-1500.00`.
    fn plain(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.cents / 100, self.cents % 100)
    }

    fn render(&self, prefix: &str) -> String {
        let whole = (self.cents / 100).to_string();
        let sign = if self.negative { "-" } else { "" };
        let body = format!("{}{}.{:02}", sign, group_thousands(&whole, ','), self.cents % 100);
        if prefix.is_empty() {
            body
        } else {
            format!("{} {}", prefix, body)
        }
    }
}

impl CellRules {
    /// Renders `raw` in its canonical display form for `column_type`.
    /// Text that cannot be interpreted is returned unchanged.
    pub fn format(&self, column_type: ColumnType, raw: &str) -> String {
        match column_type {
            ColumnType::Currency => self.format_currency(raw),
            ColumnType::Date => format_date(raw).unwrap_or_else(|| raw.to_string()),
            _ => raw.to_string(),
        }
    }

    /// `1500` -> `Lps 1,500.00`. The last '.' or ',' is taken as the decimal point,
    /// unless the text already carries the prefix, in which case it is read in the
    /// canonical form so that formatting twice is a no-op.
    pub fn format_currency(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let amount = match self.strip_currency_prefix(trimmed) {
            Some(rest) => parse_canonical_amount(rest),
            None => parse_loose_amount(trimmed),
        };
        match amount {
            Some(amount) => amount.render(&self.currency_prefix),
            None => raw.to_string(),
        }
    }
}

impl CellRules {
    /// Inverse of `format` where one exists: a formatted currency amount becomes a
    /// plain decimal that other numeric types accept. Used when a column changes type.
    pub fn raw_value(&self, column_type: ColumnType, display: &str) -> String {
        if column_type != ColumnType::Currency {
            return display.to_string();
        }
        self.strip_currency_prefix(display.trim())
            .and_then(parse_canonical_amount)
            .map(|amount| amount.plain())
            .unwrap_or_else(|| display.to_string())
    }
}

/// Re-renders a valid date as `dd-MM-yyyy`.
pub fn format_date(raw: &str) -> Option<String> {
    parse_date(raw)
        .ok()
        .map(|date| date.format("%d-%m-%Y").to_string())
}

/// Lenient reading used for freshly typed amounts: everything except digits,
/// separators and '-' is dropped, and the last separator is the decimal point.
pub(crate) fn parse_loose_amount(text: &str) -> Option<Amount> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    let negative = cleaned.contains('-');
    let unsigned: String = cleaned.chars().filter(|c| *c != '-').collect();

    let (int_part, frac_part) = match unsigned.rfind(|c: char| c == '.' || c == ',') {
        Some(idx) => (&unsigned[..idx], &unsigned[idx + 1..]),
        None => (unsigned.as_str(), ""),
    };
    Amount::from_digits(&digits_only(int_part), &digits_only(frac_part), negative)
}

/// Strict reading of our own output: optional '-', digits grouped with ',', optional '.' fraction.
pub(crate) fn parse_canonical_amount(text: &str) -> Option<Amount> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let int_ok = int_part.chars().all(|c| c.is_ascii_digit() || c == ',');
    let frac_ok = frac_part.chars().all(|c| c.is_ascii_digit());
    if !int_ok || !frac_ok || !unsigned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Amount::from_digits(&digits_only(int_part), frac_part, negative)
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let pos_from_end = len - i;
        if pos_from_end > 1 && pos_from_end % 3 == 1 {
            out.push(sep);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> CellRules {
        CellRules::default()
    }

    #[test]
    fn currency_examples() {
        let r = rules();
        assert_eq!(r.format(ColumnType::Currency, "1500"), "Lps 1,500.00");
        assert_eq!(r.format(ColumnType::Currency, "1500.5"), "Lps 1,500.50");
        assert_eq!(r.format(ColumnType::Currency, "abc"), "abc");
        assert_eq!(r.format(ColumnType::Currency, ""), "");
        assert_eq!(r.format(ColumnType::Currency, "1234567,891"), "Lps 1,234,567.89");
        assert_eq!(r.format(ColumnType::Currency, "0.005"), "Lps 0.01");
        assert_eq!(r.format(ColumnType::Currency, "-1500"), "Lps -1,500.00");
        assert_eq!(r.format(ColumnType::Currency, "-0.001"), "Lps 0.00");
    }

    #[test]
    fn last_separator_is_the_decimal_point() {
        assert_eq!(rules().format_currency("1.500,75"), "Lps 1,500.75");
        assert_eq!(rules().format_currency("1,5"), "Lps 1.50");
    }

    #[test]
    fn currency_formatting_is_idempotent() {
        let r = rules();
        for raw in ["1500", "1500.5", "-42,1", "999999.999", "0", "12", "1000000"] {
            let once = r.format(ColumnType::Currency, raw);
            let twice = r.format(ColumnType::Currency, &once);
            assert_eq!(once, twice, "formatting {raw:?} twice changed the result");
        }
    }

    #[test]
    fn prefixed_text_is_normalized_not_reparsed() {
        assert_eq!(rules().format_currency("Lps 1500"), "Lps 1,500.00");
        assert_eq!(rules().format_currency("Lps 1,500"), "Lps 1,500.00");
        assert_eq!(rules().format_currency("Lps nope"), "Lps nope");
    }

    #[test]
    fn custom_prefix() {
        let r = CellRules::with_currency_prefix("USD");
        assert_eq!(r.format_currency("2500.1"), "USD 2,500.10");
        assert_eq!(r.format_currency("USD 2,500.10"), "USD 2,500.10");
    }

    #[test]
    fn dates_are_canonicalized() {
        let r = rules();
        assert_eq!(r.format(ColumnType::Date, "15-08-24"), "15-08-2024");
        assert_eq!(r.format(ColumnType::Date, "15/08/2024"), "15-08-2024");
        assert_eq!(r.format(ColumnType::Date, "5/8/2024"), "05-08-2024");
        assert_eq!(r.format(ColumnType::Date, "not a date"), "not a date");
    }

    #[test]
    fn other_types_pass_through() {
        assert_eq!(rules().format(ColumnType::Integer, " 12 "), " 12 ");
        assert_eq!(rules().format(ColumnType::Text, "Hola"), "Hola");
    }

    #[test]
    fn raw_value_undoes_currency_formatting() {
        let r = rules();
        assert_eq!(r.raw_value(ColumnType::Currency, "Lps 1,500.50"), "1500.50");
        assert_eq!(r.raw_value(ColumnType::Currency, "Lps -3.00"), "-3.00");
        assert_eq!(r.raw_value(ColumnType::Currency, "12"), "12");
        assert_eq!(r.raw_value(ColumnType::Date, "15-08-2024"), "15-08-2024");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1", ','), "1");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("123456", ','), "123,456");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }
}
