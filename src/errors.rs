use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::{core::validation::ValidationResult, domain::BookingField};

/// Error type that captures booking computation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Invalid date range: {end} is not after {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Missing required field: {0}")]
    MissingRequiredField(BookingField),
    #[error("Passport expiry {expiry} must be after check-out {check_out}")]
    InvalidPassportExpiry {
        expiry: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("Invalid nightly price: {0}")]
    InvalidPrice(f64),
    #[error("Validation failed: {0}")]
    Validation(ValidationResult),
    #[error("Property {property_id} is not available on {date}")]
    NotAvailable { property_id: Uuid, date: NaiveDate },
    #[error("Visa invitation not requested for booking {0}")]
    InvitationNotRequested(Uuid),
    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}
