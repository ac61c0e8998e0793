//! Which booking documents and notification emails a booking may receive.
//!
//! PDF bytes and email delivery belong to external collaborators; this module
//! only decides eligibility and naming.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::Booking, errors::BookingError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    #[serde(rename = "booking")]
    BookingReceipt,
    #[serde(rename = "visa")]
    VisaInvitation,
}

impl DocumentKind {
    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::BookingReceipt => "booking",
            DocumentKind::VisaInvitation => "visa",
        }
    }

    pub fn requires_invitation(self) -> bool {
        matches!(self, DocumentKind::VisaInvitation)
    }

    /// Attachment filename for the generated PDF.
    pub fn filename(self, booking_id: Uuid) -> String {
        match self {
            DocumentKind::BookingReceipt => format!("booking-receipt-{booking_id}.pdf"),
            DocumentKind::VisaInvitation => format!("visa-invitation-{booking_id}.pdf"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" | "booking" => Ok(DocumentKind::BookingReceipt),
            "visa" => Ok(DocumentKind::VisaInvitation),
            other => Err(BookingError::UnknownDocumentKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    Confirmation,
    VisaInvitation,
}

impl EmailKind {
    pub fn key(self) -> &'static str {
        match self {
            EmailKind::Confirmation => "confirmation",
            EmailKind::VisaInvitation => "visa_invitation",
        }
    }

    pub fn requires_invitation(self) -> bool {
        matches!(self, EmailKind::VisaInvitation)
    }

    pub fn subject(self, property_title: &str) -> String {
        match self {
            EmailKind::Confirmation => format!("Booking Confirmation - {property_title}"),
            EmailKind::VisaInvitation => format!("Visa Invitation Letter - {property_title}"),
        }
    }
}

impl FromStr for EmailKind {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "confirmation" => Ok(EmailKind::Confirmation),
            "visa_invitation" => Ok(EmailKind::VisaInvitation),
            other => Err(BookingError::UnknownDocumentKind(other.to_string())),
        }
    }
}

/// A document or email the submission workflow must trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "channel", content = "kind", rename_all = "snake_case")]
pub enum FollowUp {
    Email(EmailKind),
    Document(DocumentKind),
}

impl FollowUp {
    fn requires_invitation(self) -> bool {
        match self {
            FollowUp::Email(kind) => kind.requires_invitation(),
            FollowUp::Document(kind) => kind.requires_invitation(),
        }
    }
}

impl fmt::Display for FollowUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowUp::Email(kind) => write!(f, "email:{}", kind.key()),
            FollowUp::Document(kind) => write!(f, "pdf:{}", kind.key()),
        }
    }
}

const FOLLOW_UPS: [FollowUp; 4] = [
    FollowUp::Email(EmailKind::Confirmation),
    FollowUp::Document(DocumentKind::BookingReceipt),
    FollowUp::Email(EmailKind::VisaInvitation),
    FollowUp::Document(DocumentKind::VisaInvitation),
];

/// Rejects visa paperwork for bookings that never asked for an invitation.
pub fn ensure_document_allowed(booking: &Booking, kind: DocumentKind) -> Result<(), BookingError> {
    ensure_follow_up_allowed(booking, FollowUp::Document(kind))
}

pub fn ensure_email_allowed(booking: &Booking, kind: EmailKind) -> Result<(), BookingError> {
    ensure_follow_up_allowed(booking, FollowUp::Email(kind))
}

fn ensure_follow_up_allowed(booking: &Booking, follow_up: FollowUp) -> Result<(), BookingError> {
    if follow_up.requires_invitation() && !booking.needs_invitation {
        return Err(BookingError::InvitationNotRequested(booking.id));
    }
    Ok(())
}

/// Everything a freshly stored booking should trigger, confirmation first.
pub fn required_follow_ups(booking: &Booking) -> Vec<FollowUp> {
    follow_ups(booking.needs_invitation)
}

pub fn follow_ups(needs_invitation: bool) -> Vec<FollowUp> {
    FOLLOW_UPS
        .into_iter()
        .filter(|follow_up| needs_invitation || !follow_up.requires_invitation())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(needs_invitation: bool) -> Booking {
        let mut booking = Booking::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            Some(300.0),
        );
        booking.needs_invitation = needs_invitation;
        booking
    }

    #[test]
    fn plain_booking_gets_confirmation_and_receipt() {
        assert_eq!(
            required_follow_ups(&booking(false)),
            vec![
                FollowUp::Email(EmailKind::Confirmation),
                FollowUp::Document(DocumentKind::BookingReceipt),
            ]
        );
    }

    #[test]
    fn invitation_booking_adds_visa_paperwork() {
        let follow_ups = required_follow_ups(&booking(true));
        assert_eq!(follow_ups.len(), 4);
        assert!(follow_ups.contains(&FollowUp::Document(DocumentKind::VisaInvitation)));
    }

    #[test]
    fn visa_pdf_requires_invitation_flag() {
        let plain = booking(false);
        let err = ensure_document_allowed(&plain, DocumentKind::VisaInvitation).unwrap_err();
        assert_eq!(err, BookingError::InvitationNotRequested(plain.id));
        assert!(ensure_document_allowed(&plain, DocumentKind::BookingReceipt).is_ok());
        assert!(ensure_email_allowed(&booking(true), EmailKind::VisaInvitation).is_ok());
    }

    #[test]
    fn kinds_parse_from_route_parameters() {
        assert_eq!("".parse::<DocumentKind>().unwrap(), DocumentKind::BookingReceipt);
        assert_eq!("visa".parse::<DocumentKind>().unwrap(), DocumentKind::VisaInvitation);
        assert!("invoice".parse::<DocumentKind>().is_err());
        assert_eq!(
            "visa_invitation".parse::<EmailKind>().unwrap(),
            EmailKind::VisaInvitation
        );
    }

    #[test]
    fn names_and_subjects() {
        let id = Uuid::nil();
        assert_eq!(
            DocumentKind::VisaInvitation.filename(id),
            "visa-invitation-00000000-0000-0000-0000-000000000000.pdf"
        );
        assert_eq!(
            EmailKind::Confirmation.subject("Sea View"),
            "Booking Confirmation - Sea View"
        );
    }
}
