pub mod booking_service;
pub mod dashboard_service;

pub use booking_service::{BookingService, PreparedBooking};
pub use dashboard_service::{DashboardReport, DashboardService};

use std::io;

use crate::{config::ConfigError, errors::BookingError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}
