//! Booking computations: quoting, validation, availability, search, and
//! the admin aggregations. Nothing here performs I/O.

pub mod access;
pub mod availability;
pub mod documents;
pub mod pricing;
pub mod search;
pub mod services;
pub mod stats;
pub mod validation;
pub mod visa;

pub use availability::{availability_label, covers_stay, is_available, AvailabilityLabel};
pub use pricing::{compute_quote, BookingQuote};
pub use stats::{
    admin_activity, aggregate, aggregate_with_window, dashboard_totals, AdminActivity,
    DashboardTotals, PropertyStat, OCCUPANCY_WINDOW_DAYS,
};
pub use validation::{validate, ValidationIssue, ValidationKind, ValidationResult};
pub use visa::is_passport_required;
