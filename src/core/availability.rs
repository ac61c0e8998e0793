use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{domain::Property, errors::BookingError};

/// Whether `property` accepts bookings on `as_of`.
///
/// Listings without both window bounds are always open.
pub fn is_available(property: &Property, as_of: NaiveDate) -> Result<bool, BookingError> {
    Ok(property
        .availability_window()?
        .map_or(true, |window| window.contains(as_of)))
}

/// Display-only status of a bounded listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "label", content = "date", rename_all = "kebab-case")]
pub enum AvailabilityLabel {
    AvailableFrom(NaiveDate),
    Expired,
    AvailableUntil(NaiveDate),
}

impl AvailabilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityLabel::AvailableFrom(_) => "available-from-future-date",
            AvailabilityLabel::Expired => "expired",
            AvailabilityLabel::AvailableUntil(_) => "available-until-date",
        }
    }
}

impl fmt::Display for AvailabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityLabel::AvailableFrom(date) => write!(f, "Available from {date}"),
            AvailabilityLabel::Expired => f.write_str("Availability expired - Contact admin"),
            AvailabilityLabel::AvailableUntil(date) => write!(f, "Available until {date}"),
        }
    }
}

/// Label for the listing card; `None` for open-ended listings.
pub fn availability_label(
    property: &Property,
    as_of: NaiveDate,
) -> Result<Option<AvailabilityLabel>, BookingError> {
    let Some(window) = property.availability_window()? else {
        return Ok(None);
    };
    let label = if as_of < window.from {
        AvailabilityLabel::AvailableFrom(window.from)
    } else if as_of > window.to {
        AvailabilityLabel::Expired
    } else {
        AvailabilityLabel::AvailableUntil(window.to)
    };
    Ok(Some(label))
}

/// Whether every night of a stay falls inside the listing's window.
pub fn covers_stay(
    property: &Property,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<bool, BookingError> {
    Ok(property
        .availability_window()?
        .map_or(true, |window| {
            window.contains(check_in) && window.contains(check_out)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january_listing() -> Property {
        Property::new("Cabin", 120.0).with_window(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let property = january_listing();
        assert!(is_available(&property, date(2024, 1, 1)).unwrap());
        assert!(is_available(&property, date(2024, 1, 15)).unwrap());
        assert!(is_available(&property, date(2024, 1, 31)).unwrap());
        assert!(!is_available(&property, date(2024, 2, 1)).unwrap());
        assert!(!is_available(&property, date(2023, 12, 31)).unwrap());
    }

    #[test]
    fn half_open_window_is_always_available() {
        let property = Property::new("Cabin", 120.0).with_window(None, Some(date(2020, 1, 1)));
        assert!(is_available(&property, date(2030, 6, 1)).unwrap());
        assert_eq!(availability_label(&property, date(2030, 6, 1)).unwrap(), None);
    }

    #[test]
    fn labels_follow_the_same_comparisons() {
        let property = january_listing();
        let before = availability_label(&property, date(2023, 12, 1)).unwrap();
        let during = availability_label(&property, date(2024, 1, 10)).unwrap();
        let after = availability_label(&property, date(2024, 2, 10)).unwrap();
        assert_eq!(before, Some(AvailabilityLabel::AvailableFrom(date(2024, 1, 1))));
        assert_eq!(during.map(|l| l.as_str()), Some("available-until-date"));
        assert_eq!(after, Some(AvailabilityLabel::Expired));
        assert_eq!(
            after.map(|l| l.to_string()).as_deref(),
            Some("Availability expired - Contact admin")
        );
    }

    #[test]
    fn inverted_window_surfaces_range_error() {
        let property =
            Property::new("Cabin", 120.0).with_window(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(is_available(&property, date(2024, 1, 15)).is_err());
        assert!(availability_label(&property, date(2024, 1, 15)).is_err());
    }

    #[test]
    fn stay_must_fit_inside_window() {
        let property = january_listing();
        assert!(covers_stay(&property, date(2024, 1, 10), date(2024, 1, 12)).unwrap());
        assert!(!covers_stay(&property, date(2024, 1, 30), date(2024, 2, 2)).unwrap());
    }
}
