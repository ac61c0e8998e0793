use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn minor_units(&self) -> u8 {
        minor_units_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separators used when rendering amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Picks separators for a BCP 47 tag; unknown tags fall back to en-US.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag.split(['-', '_']).next() {
            Some("de" | "es" | "it" | "pt" | "nl") => (',', '.'),
            Some("fr") => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "GHS" => "GH₵".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Rounds `value` to `precision` decimal places, half-up.
///
/// The scaled value is nudged by a few ULPs so that decimal midpoints which
/// are not representable in binary (e.g. 2.675) still round upwards.
pub fn round_to_minor_units(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    let nudge = scaled.abs() * f64::EPSILON * 4.0;
    (scaled + 0.5 + nudge).floor() / factor
}

/// Rounds to cents, the precision every listing price is quoted in.
pub fn round_money(value: f64) -> f64 {
    round_to_minor_units(value, 2)
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount with the currency symbol, e.g. `$1,234.50`.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = code.minor_units();
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Renders a percentage with one decimal, as the dashboard shows occupancy.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_cent_midpoints() {
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(round_money(1.005), 1.01);
        assert_eq!(round_money(10.004), 10.0);
        assert_eq!(round_money(-1.005), -1.0);
    }

    #[test]
    fn zero_precision_rounds_to_whole_units() {
        assert_eq!(round_to_minor_units(149.5, 0), 150.0);
    }

    #[test]
    fn formats_grouped_amounts() {
        let locale = LocaleConfig::default();
        let formatted = format_currency_value(1234.5, &CurrencyCode::new("usd"), &locale);
        assert_eq!(formatted, "$1,234.50");
    }

    #[test]
    fn german_locale_swaps_separators() {
        let locale = LocaleConfig::for_tag("de-DE");
        assert_eq!(format_number(&locale, 1234567.891, 2), "1.234.567,89");
    }
}
