//! Admin dashboard aggregations over fetched properties and bookings.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    core::access::{Role, UserProfile},
    domain::{Booking, Property},
};

/// Length of the trailing window used by the occupancy proxy.
pub const OCCUPANCY_WINDOW_DAYS: u32 = 30;

/// Per-listing performance row for the admin ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyStat {
    pub property_id: Uuid,
    pub title: String,
    pub bookings_count: usize,
    pub total_revenue: f64,
    /// Bookings created in the trailing window per day of the window, as a
    /// percentage capped at 100. Not a night-level occupancy measure.
    pub occupancy_rate: f64,
}

/// Headline numbers shown above the ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardTotals {
    pub total_properties: usize,
    pub total_bookings: usize,
    pub total_revenue: f64,
}

/// Ranks `properties` by booking revenue using the default 30-day window.
pub fn aggregate(
    properties: &[Property],
    bookings: &[Booking],
    as_of: DateTime<Utc>,
) -> Vec<PropertyStat> {
    aggregate_with_window(properties, bookings, as_of, OCCUPANCY_WINDOW_DAYS)
}

/// Ranks `properties` by revenue, highest first; ties keep input order.
///
/// Every property appears in the output. Bookings whose property is not in
/// `properties` are ignored. A booking counts towards occupancy when it was
/// created after `as_of - window_days` and no later than `as_of`.
pub fn aggregate_with_window(
    properties: &[Property],
    bookings: &[Booking],
    as_of: DateTime<Utc>,
    window_days: u32,
) -> Vec<PropertyStat> {
    let window_days = window_days.max(1);
    let window_start = as_of - Duration::days(i64::from(window_days));

    let mut by_property: HashMap<Uuid, Vec<&Booking>> = properties
        .iter()
        .map(|property| (property.id, Vec::new()))
        .collect();
    let mut orphaned = 0usize;
    for booking in bookings {
        match by_property.get_mut(&booking.property_id) {
            Some(partition) => partition.push(booking),
            None => orphaned += 1,
        }
    }
    if orphaned > 0 {
        tracing::debug!(orphaned, "skipping bookings for unknown properties");
    }

    let mut stats: Vec<PropertyStat> = properties
        .iter()
        .map(|property| {
            let partition = by_property
                .get(&property.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let total_revenue = partition
                .iter()
                .fold(0.0, |sum, booking| sum + booking.total_price.unwrap_or(0.0));
            let recent = partition
                .iter()
                .filter(|booking| {
                    booking.created_at > window_start && booking.created_at <= as_of
                })
                .count();
            let occupancy_rate =
                (recent as f64 / f64::from(window_days) * 100.0).min(100.0);
            PropertyStat {
                property_id: property.id,
                title: property.title.clone(),
                bookings_count: partition.len(),
                total_revenue,
                occupancy_rate,
            }
        })
        .collect();

    // total_cmp keeps the order total when a row carries a NaN total.
    stats.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    stats
}

/// Totals across every fetched row, orphaned bookings included.
pub fn dashboard_totals(properties: &[Property], bookings: &[Booking]) -> DashboardTotals {
    DashboardTotals {
        total_properties: properties.len(),
        total_bookings: bookings.len(),
        total_revenue: bookings
            .iter()
            .fold(0.0, |sum, booking| sum + booking.total_price.unwrap_or(0.0)),
    }
}

/// Listing activity of one admin account for the oversight panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminActivity {
    pub user_id: Uuid,
    pub role: Role,
    pub property_count: usize,
    /// Newest listing they created, or when the profile was created if none.
    pub last_activity: DateTime<Utc>,
}

/// Summarises listings per admin and super-admin profile, in profile order.
///
/// Listings without an owner, or owned by non-admin profiles, are not counted.
pub fn admin_activity(profiles: &[UserProfile], properties: &[Property]) -> Vec<AdminActivity> {
    let mut by_owner: HashMap<Uuid, (usize, DateTime<Utc>)> = HashMap::new();
    for property in properties {
        let Some(owner) = property.created_by else {
            continue;
        };
        let entry = by_owner
            .entry(owner)
            .or_insert((0, property.created_at));
        entry.0 += 1;
        entry.1 = entry.1.max(property.created_at);
    }

    profiles
        .iter()
        .filter(|profile| matches!(profile.role, Role::Admin | Role::SuperAdmin))
        .map(|profile| {
            let (property_count, last_activity) = by_owner
                .get(&profile.user_id)
                .copied()
                .unwrap_or((0, profile.created_at));
            AdminActivity {
                user_id: profile.user_id,
                role: profile.role,
                property_count,
                last_activity,
            }
        })
        .collect()
}
