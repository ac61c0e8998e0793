use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;

/// A rental listing as fetched from the properties table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    pub price_per_night: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub max_guests: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_to: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Admin account that listed the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

impl Property {
    /// Creates an open-ended listing with a fresh identifier.
    pub fn new(title: impl Into<String>, price_per_night: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            property_type: None,
            price_per_night,
            bedrooms: 0,
            bathrooms: 0,
            max_guests: 0,
            amenities: BTreeSet::new(),
            available_from: None,
            available_to: None,
            created_at: Utc::now(),
            created_by: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_capacity(mut self, bedrooms: u32, bathrooms: u32, max_guests: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self.max_guests = max_guests;
        self
    }

    pub fn with_window(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.available_from = from;
        self.available_to = to;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_owner(mut self, owner: Uuid) -> Self {
        self.created_by = Some(owner);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }

    /// Returns the bounded availability window, or `None` when either bound is open.
    pub fn availability_window(&self) -> Result<Option<AvailabilityWindow>, BookingError> {
        match (self.available_from, self.available_to) {
            (Some(from), Some(to)) => AvailabilityWindow::new(from, to).map(Some),
            _ => Ok(None),
        }
    }
}

/// Inclusive calendar range during which a listing accepts bookings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl AvailabilityWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, BookingError> {
        if to < from {
            return Err(BookingError::InvalidDateRange {
                start: from,
                end: to,
            });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Number of days between the two bounds, as shown on the listing page.
    pub fn duration_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}
