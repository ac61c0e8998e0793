use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ServiceResult;
use crate::{
    config::Config,
    core::stats::{aggregate_with_window, dashboard_totals, DashboardTotals, PropertyStat},
    domain::{Booking, Property},
};

/// Everything the admin dashboard shows in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    pub totals: DashboardTotals,
    pub ranking: Vec<PropertyStat>,
}

impl DashboardReport {
    pub fn top(&self, limit: usize) -> &[PropertyStat] {
        &self.ranking[..limit.min(self.ranking.len())]
    }
}

pub struct DashboardService;

impl DashboardService {
    pub fn report(
        properties: &[Property],
        bookings: &[Booking],
        as_of: DateTime<Utc>,
        config: &Config,
    ) -> ServiceResult<DashboardReport> {
        let totals = dashboard_totals(properties, bookings);
        let ranking =
            aggregate_with_window(properties, bookings, as_of, config.occupancy_window_days);
        tracing::info!(
            properties = totals.total_properties,
            bookings = totals.total_bookings,
            window_days = config.occupancy_window_days,
            "built dashboard report"
        );
        Ok(DashboardReport { totals, ranking })
    }
}
