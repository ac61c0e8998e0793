pub mod booking;
pub mod property;

pub use booking::{Booking, BookingField, BookingRequest, BookingStatus, NewBooking, VisaPosture};
pub use property::{AvailabilityWindow, Property};
