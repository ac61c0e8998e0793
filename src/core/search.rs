//! Listing filters and sort orders for the home page.

use std::{cmp::Reverse, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{core::availability::covers_stay, domain::Property, errors::BookingError};

/// Type selector value that disables type filtering.
pub const ALL_TYPES: &str = "All Types";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
    Oldest,
    Bedrooms,
    Guests,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Bedrooms,
        SortOrder::Guests,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortOrder::PriceLow => "price_low",
            SortOrder::PriceHigh => "price_high",
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Bedrooms => "bedrooms",
            SortOrder::Guests => "guests",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PriceLow => "Price: Low to High",
            SortOrder::PriceHigh => "Price: High to Low",
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Bedrooms => "Most Bedrooms",
            SortOrder::Guests => "Most Guests",
        }
    }

    /// Stable in-place sort of `listings`.
    pub fn apply(self, listings: &mut [&Property]) {
        match self {
            SortOrder::PriceLow => {
                listings.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night))
            }
            SortOrder::PriceHigh => {
                listings.sort_by(|a, b| b.price_per_night.total_cmp(&a.price_per_night))
            }
            SortOrder::Newest => listings.sort_by_key(|p| Reverse(p.created_at)),
            SortOrder::Oldest => listings.sort_by_key(|p| p.created_at),
            SortOrder::Bedrooms => listings.sort_by_key(|p| Reverse(p.bedrooms)),
            SortOrder::Guests => listings.sort_by_key(|p| Reverse(p.max_guests)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        SortOrder::ALL
            .into_iter()
            .find(|order| order.key() == needle)
            .ok_or_else(|| BookingError::UnknownSortOrder(value.to_string()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Criteria from the search bar and type selector. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyFilter {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    /// Check-in/check-out pair that must fit inside the listing's window.
    #[serde(default)]
    pub stay: Option<(NaiveDate, NaiveDate)>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty()
                && !property
                    .location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if property.price_per_night > max_price {
                return false;
            }
        }

        if let Some(wanted) = self.property_type.as_deref().map(str::trim) {
            if !wanted.is_empty() && !wanted.eq_ignore_ascii_case(ALL_TYPES) {
                let listed = property.property_type.as_deref().unwrap_or_default();
                if !listed.eq_ignore_ascii_case(wanted) {
                    return false;
                }
            }
        }

        if let Some((check_in, check_out)) = self.stay {
            match covers_stay(property, check_in, check_out) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(err) => {
                    tracing::warn!(
                        property_id = %property.id,
                        %err,
                        "excluding listing with invalid window"
                    );
                    return false;
                }
            }
        }

        true
    }
}

/// Filters then sorts listings for display.
pub fn search<'a>(
    properties: &'a [Property],
    filter: &PropertyFilter,
    order: SortOrder,
) -> Vec<&'a Property> {
    let mut results: Vec<&Property> = properties.iter().filter(|p| filter.matches(p)).collect();
    order.apply(&mut results);
    results
}
