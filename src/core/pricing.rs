//! Nightly-rate quoting for a prospective stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{currency::round_money, errors::BookingError};

/// Nights and total price for a stay at a fixed nightly rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BookingQuote {
    pub nights: i64,
    pub nightly_rate: f64,
    pub total_price: f64,
}

/// Quotes a stay from `check_in` to `check_out` at `price_per_night`.
///
/// Dates are calendar days, so the night count is the exact day difference.
/// The total is rounded half-up to cents.
pub fn compute_quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: f64,
) -> Result<BookingQuote, BookingError> {
    if check_out <= check_in {
        return Err(BookingError::InvalidDateRange {
            start: check_in,
            end: check_out,
        });
    }
    if !price_per_night.is_finite() || price_per_night <= 0.0 {
        return Err(BookingError::InvalidPrice(price_per_night));
    }
    let nights = (check_out - check_in).num_days();
    Ok(BookingQuote {
        nights,
        nightly_rate: price_per_night,
        total_price: round_money(nights as f64 * price_per_night),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_at_one_hundred() {
        let quote = compute_quote(date(2024, 3, 1), date(2024, 3, 4), 100.0).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total_price, 300.0);
    }

    #[test]
    fn same_day_stay_is_an_invalid_range() {
        let err = compute_quote(date(2024, 3, 1), date(2024, 3, 1), 100.0)
            .expect_err("zero nights must fail");
        assert_eq!(
            err,
            BookingError::InvalidDateRange {
                start: date(2024, 3, 1),
                end: date(2024, 3, 1),
            }
        );
    }

    #[test]
    fn reversed_dates_are_rejected() {
        assert!(compute_quote(date(2024, 3, 4), date(2024, 3, 1), 100.0).is_err());
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let err = compute_quote(date(2024, 3, 1), date(2024, 3, 2), 0.0).unwrap_err();
        assert!(matches!(err, BookingError::InvalidPrice(_)));
        assert!(compute_quote(date(2024, 3, 1), date(2024, 3, 2), f64::NAN).is_err());
    }

    #[test]
    fn total_is_rounded_to_cents() {
        let quote = compute_quote(date(2024, 1, 1), date(2024, 1, 2), 19.995).unwrap();
        assert_eq!(quote.total_price, 20.0);
        let quote = compute_quote(date(2024, 1, 1), date(2024, 1, 4), 33.33).unwrap();
        assert_eq!(quote.total_price, 99.99);
    }

    #[test]
    fn stay_across_leap_day_counts_it() {
        let quote = compute_quote(date(2024, 2, 28), date(2024, 3, 1), 50.0).unwrap();
        assert_eq!(quote.nights, 2);
    }
}
