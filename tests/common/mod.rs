#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use stay_core::domain::{Booking, BookingRequest, Property};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed dashboard clock used across the suites.
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()
}

pub fn listings() -> Vec<Property> {
    vec![
        Property::new("Airport Studio", 45.0)
            .with_location("Accra, Ghana")
            .with_type("Studio")
            .with_capacity(1, 1, 2)
            .with_created_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        Property::new("Cape Coast Villa", 320.0)
            .with_location("Cape Coast, Ghana")
            .with_type("Villa")
            .with_capacity(4, 3, 8)
            .with_window(Some(date(2024, 1, 1)), Some(date(2024, 12, 31)))
            .with_created_at(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
    ]
}

pub fn booking_for(property: &Property, total: Option<f64>, days_ago: i64) -> Booking {
    Booking::new(property.id, date(2024, 7, 1), date(2024, 7, 3), total)
        .with_created_at(as_of() - Duration::days(days_ago))
}

pub fn guest_request() -> BookingRequest {
    BookingRequest {
        guest_name: "Ama Mensah".into(),
        guest_email: "ama@example.com".into(),
        guest_phone: "+233 20 123 4567".into(),
        check_in: Some(date(2024, 3, 1)),
        check_out: Some(date(2024, 3, 4)),
        ..BookingRequest::default()
    }
}
