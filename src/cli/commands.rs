//! Command implementations behind `stay_core_cli`. Each returns data or a
//! rendered string so the binary only handles arguments and exit codes.

use std::{fs, path::Path};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

use crate::{
    cli::table::{Alignment, Table, TableColumn},
    config::{Config, ConfigManager},
    core::{
        compute_quote,
        services::{DashboardReport, DashboardService, ServiceError, ServiceResult},
        validate, BookingQuote, ValidationResult,
    },
    currency::{format_currency_value, format_percent},
    domain::{Booking, BookingRequest, Property},
};

const TITLE_WIDTH: usize = 28;

/// Config from `STAY_CORE_HOME` (or `~/.stay_core`), defaults when absent.
pub fn load_config() -> ServiceResult<Config> {
    Ok(ConfigManager::from_env().load()?)
}

pub fn parse_date(value: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ServiceError::Invalid(format!("expected a YYYY-MM-DD date, got `{value}`")))
}

/// Accepts RFC 3339 timestamps or plain dates (midnight UTC); defaults to now.
pub fn parse_as_of(value: Option<&str>) -> ServiceResult<DateTime<Utc>> {
    let Some(value) = value else {
        return Ok(Utc::now());
    };
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    let date = parse_date(value)?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
}

pub fn parse_price(value: &str) -> ServiceResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ServiceError::Invalid(format!("expected a nightly price, got `{value}`")))
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> ServiceResult<T> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), "loaded input file");
    Ok(value)
}

pub fn quote(check_in: &str, check_out: &str, price: &str) -> ServiceResult<BookingQuote> {
    let quote = compute_quote(parse_date(check_in)?, parse_date(check_out)?, parse_price(price)?)?;
    Ok(quote)
}

pub fn render_quote(quote: &BookingQuote, config: &Config) -> String {
    let code = config.currency_code();
    let locale = config.locale_config();
    format!(
        "{} night(s) x {} = {}",
        quote.nights,
        format_currency_value(quote.nightly_rate, &code, &locale),
        format_currency_value(quote.total_price, &code, &locale)
    )
}

pub fn validate_file(path: &Path) -> ServiceResult<ValidationResult> {
    let request: BookingRequest = load_json(path)?;
    Ok(validate(&request))
}

/// One `field: message` line per failing field, in form order.
pub fn render_validation(result: &ValidationResult) -> Vec<String> {
    result
        .errors()
        .iter()
        .map(|(field, issue)| format!("{field}: {}", issue.message))
        .collect()
}

pub fn stats(
    properties_path: &Path,
    bookings_path: &Path,
    as_of: Option<&str>,
    config: &Config,
) -> ServiceResult<DashboardReport> {
    let properties: Vec<Property> = load_json(properties_path)?;
    let bookings: Vec<Booking> = load_json(bookings_path)?;
    DashboardService::report(&properties, &bookings, parse_as_of(as_of)?, config)
}

pub fn render_report(report: &DashboardReport, config: &Config) -> String {
    let code = config.currency_code();
    let locale = config.locale_config();

    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Property", Alignment::Left).with_max_width(TITLE_WIDTH),
        TableColumn::new("Bookings", Alignment::Right),
        TableColumn::new("Revenue", Alignment::Right),
        TableColumn::new("Occupancy", Alignment::Right),
    ]);
    for (rank, stat) in report.ranking.iter().enumerate() {
        table.push_row(vec![
            (rank + 1).to_string(),
            stat.title.clone(),
            stat.bookings_count.to_string(),
            format_currency_value(stat.total_revenue, &code, &locale),
            format_percent(stat.occupancy_rate),
        ]);
    }

    format!(
        "Properties: {}  Bookings: {}  Revenue: {}\n{}",
        report.totals.total_properties,
        report.totals.total_bookings,
        format_currency_value(report.totals.total_revenue, &code, &locale),
        table.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_mean_midnight_utc() {
        assert_eq!(
            parse_as_of(Some("2024-06-30")).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_as_of(Some("2024-06-30T10:00:00+02:00")).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap()
        );
        assert!(parse_as_of(Some("yesterday")).is_err());
    }

    #[test]
    fn quote_renders_in_configured_currency() {
        let quote = quote("2024-03-01", "2024-03-04", "1250").unwrap();
        let config = Config {
            locale: "de-DE".into(),
            currency: "EUR".into(),
            ..Config::default()
        };
        assert_eq!(render_quote(&quote, &config), "3 night(s) x €1.250,00 = €3.750,00");
    }

    #[test]
    fn corrupt_config_surfaces_as_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        std::fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        std::fs::write(manager.path(), "{").unwrap();
        let err: ServiceError = manager.load().map_err(ServiceError::from).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn bad_arguments_are_invalid_input() {
        assert!(matches!(
            quote("2024-03-01", "soon", "100"),
            Err(ServiceError::Invalid(_))
        ));
        assert!(matches!(
            quote("2024-03-01", "2024-03-04", "free"),
            Err(ServiceError::Invalid(_))
        ));
    }
}
