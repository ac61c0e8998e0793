//! Booking rows, guest-supplied requests, and the visa posture they carry.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;


const VISA_STATUS_HAVE: &str = "have_visa";
const VISA_STATUS_NEED_HELP: &str = "need_help";

/// The visa situation a guest declares on the booking form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VisaPosture {
    #[default]
    NoVisaNeeded,
    HasVisa,
    NeedsHelp,
}

impl VisaPosture {
    pub const ALL: [VisaPosture; 3] = [
        VisaPosture::NoVisaNeeded,
        VisaPosture::HasVisa,
        VisaPosture::NeedsHelp,
    ];

    /// Rebuilds the posture from the stored `has_visa` / `visa_status` columns.
    ///
    /// `has_visa` records whether the guest needs a visa at all. An unknown
    /// status on a visa-requiring booking is read as "already has one".
    pub fn from_flags(has_visa: bool, visa_status: Option<&str>) -> Self {
        match (has_visa, visa_status) {
            (false, _) => VisaPosture::NoVisaNeeded,
            (true, Some(VISA_STATUS_NEED_HELP)) => VisaPosture::NeedsHelp,
            (true, _) => VisaPosture::HasVisa,
        }
    }

    /// Returns the `(has_visa, visa_status)` column pair for this posture.
    pub fn to_flags(self) -> (bool, Option<&'static str>) {
        match self {
            VisaPosture::NoVisaNeeded => (false, None),
            VisaPosture::HasVisa => (true, Some(VISA_STATUS_HAVE)),
            VisaPosture::NeedsHelp => (true, Some(VISA_STATUS_NEED_HELP)),
        }
    }
}

impl fmt::Display for VisaPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VisaPosture::NoVisaNeeded => "no-visa-needed",
            VisaPosture::HasVisa => "has-visa",
            VisaPosture::NeedsHelp => "needs-help",
        };
        f.write_str(label)
    }
}

/// Names the booking form fields that validation can report on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    GuestName,
    GuestEmail,
    GuestPhone,
    CheckIn,
    CheckOut,
    PassportNumber,
    PassportCountry,
    PassportExpiry,
}

impl BookingField {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingField::GuestName => "guest_name",
            BookingField::GuestEmail => "guest_email",
            BookingField::GuestPhone => "guest_phone",
            BookingField::CheckIn => "check_in",
            BookingField::CheckOut => "check_out",
            BookingField::PassportNumber => "passport_number",
            BookingField::PassportCountry => "passport_country",
            BookingField::PassportExpiry => "passport_expiry",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guest input captured by the booking form, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub visa_posture: VisaPosture,
    #[serde(default)]
    pub wants_invitation_letter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A persisted booking row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub property_id: Uuid,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub has_visa: bool,
    #[serde(default)]
    pub visa_status: Option<String>,
    #[serde(default)]
    pub needs_invitation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        property_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_price: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            property_id,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            check_in,
            check_out,
            total_price,
            has_visa: false,
            visa_status: None,
            needs_invitation: false,
            passport_number: None,
            passport_country: None,
            passport_expiry: None,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn visa_posture(&self) -> VisaPosture {
        VisaPosture::from_flags(self.has_visa, self.visa_status.as_deref())
    }
}

/// Insert payload handed to persistence once a request has been validated and quoted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub property_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: f64,
    pub has_visa: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_status: Option<String>,
    pub needs_invitation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_expiry: Option<NaiveDate>,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posture_flags_round_trip_through_columns() {
        for posture in VisaPosture::ALL {
            let (has_visa, status) = posture.to_flags();
            assert_eq!(VisaPosture::from_flags(has_visa, status), posture);
        }
    }

    #[test]
    fn unknown_status_on_visa_booking_reads_as_has_visa() {
        assert_eq!(
            VisaPosture::from_flags(true, Some("pending")),
            VisaPosture::HasVisa
        );
        assert_eq!(VisaPosture::from_flags(false, Some("need_help")), VisaPosture::NoVisaNeeded);
    }

    #[test]
    fn request_parses_kebab_case_posture() {
        let json = r#"{"guest_name": "Ama", "visa_posture": "needs-help", "wants_invitation_letter": true}"#;
        let request: BookingRequest = serde_json::from_str(json).expect("parse request");
        assert_eq!(request.visa_posture, VisaPosture::NeedsHelp);
        assert!(request.check_in.is_none());
    }
}
