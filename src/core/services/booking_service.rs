use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ServiceResult;
use crate::{
    core::{
        availability::is_available,
        documents::{follow_ups, FollowUp},
        pricing::{compute_quote, BookingQuote},
        validation::validate,
        visa::{is_passport_required, needs_invitation},
    },
    domain::{BookingRequest, BookingStatus, NewBooking, Property},
    errors::BookingError,
};

/// Insert payload together with the quote and the notifications it triggers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreparedBooking {
    pub booking: NewBooking,
    pub quote: BookingQuote,
    pub follow_ups: Vec<FollowUp>,
}

pub struct BookingService;

impl BookingService {
    /// Turns a guest request into a pending booking row for `property`.
    pub fn prepare(
        property: &Property,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> ServiceResult<NewBooking> {
        Self::plan(property, request, today).map(|prepared| prepared.booking)
    }

    /// Validates, checks availability and quotes in one pass.
    ///
    /// Validation runs first and reports every failing field at once.
    pub fn plan(
        property: &Property,
        request: &BookingRequest,
        today: NaiveDate,
    ) -> ServiceResult<PreparedBooking> {
        let validation = validate(request);
        let (check_in, check_out) = match (request.check_in, request.check_out) {
            (Some(check_in), Some(check_out)) if validation.is_ok() => (check_in, check_out),
            _ => {
                let err = BookingError::Validation(validation);
                tracing::debug!(property_id = %property.id, %err, "rejected booking request");
                return Err(err.into());
            }
        };

        if !is_available(property, today)? {
            tracing::info!(property_id = %property.id, %today, "property not bookable today");
            return Err(BookingError::NotAvailable {
                property_id: property.id,
                date: today,
            }
            .into());
        }

        let quote = compute_quote(check_in, check_out, property.price_per_night)?;

        let posture = request.visa_posture;
        let wants_letter = request.wants_invitation_letter;
        let (has_visa, visa_status) = posture.to_flags();
        let invitation = needs_invitation(posture, wants_letter);
        let keep_passport = is_passport_required(posture, wants_letter);

        let booking = NewBooking {
            user_id: None,
            property_id: property.id,
            guest_name: request.guest_name.trim().to_string(),
            guest_email: request.guest_email.trim().to_string(),
            guest_phone: request.guest_phone.trim().to_string(),
            check_in,
            check_out,
            total_price: quote.total_price,
            has_visa,
            visa_status: visa_status.map(str::to_string),
            needs_invitation: invitation,
            passport_number: request
                .passport_number
                .clone()
                .filter(|_| keep_passport),
            passport_country: request
                .passport_country
                .clone()
                .filter(|_| keep_passport),
            passport_expiry: request.passport_expiry.filter(|_| keep_passport),
            status: BookingStatus::Pending,
        };

        tracing::info!(
            property_id = %property.id,
            nights = quote.nights,
            total = quote.total_price,
            needs_invitation = invitation,
            "prepared booking"
        );

        Ok(PreparedBooking {
            booking,
            quote,
            follow_ups: follow_ups(invitation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            documents::{DocumentKind, EmailKind},
            services::ServiceError,
        },
        domain::{BookingField, VisaPosture},
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> BookingRequest {
        BookingRequest {
            guest_name: "Ama Mensah".into(),
            guest_email: "ama@example.com".into(),
            guest_phone: "+233 20 123 4567".into(),
            check_in: Some(date(2024, 3, 1)),
            check_out: Some(date(2024, 3, 4)),
            ..BookingRequest::default()
        }
    }

    #[test]
    fn plain_request_becomes_pending_row() {
        let property = Property::new("Osu Apartment", 100.0);
        let booking = BookingService::prepare(&property, &request(), date(2024, 2, 1))
            .expect("prepared");
        assert_eq!(booking.total_price, 300.0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.has_visa);
        assert!(!booking.needs_invitation);
        assert_eq!(booking.visa_status, None);
    }

    #[test]
    fn invitation_request_keeps_passport_and_adds_paperwork() {
        let property = Property::new("Osu Apartment", 100.0);
        let mut req = request();
        req.visa_posture = VisaPosture::NeedsHelp;
        req.wants_invitation_letter = true;
        req.passport_number = Some("G1234567".into());
        req.passport_country = Some("Nigeria".into());
        req.passport_expiry = Some(date(2025, 1, 1));

        let prepared =
            BookingService::plan(&property, &req, date(2024, 2, 1)).expect("prepared");
        assert!(prepared.booking.has_visa);
        assert!(prepared.booking.needs_invitation);
        assert_eq!(prepared.booking.visa_status.as_deref(), Some("need_help"));
        assert_eq!(prepared.booking.passport_number.as_deref(), Some("G1234567"));
        assert_eq!(prepared.quote.nights, 3);
        assert!(prepared
            .follow_ups
            .contains(&FollowUp::Document(DocumentKind::VisaInvitation)));
        assert!(prepared
            .follow_ups
            .contains(&FollowUp::Email(EmailKind::VisaInvitation)));
    }

    #[test]
    fn passport_fields_are_dropped_when_not_required() {
        let property = Property::new("Osu Apartment", 100.0);
        let mut req = request();
        req.passport_number = Some("G1234567".into());
        let booking = BookingService::prepare(&property, &req, date(2024, 2, 1)).unwrap();
        assert_eq!(booking.passport_number, None);
    }

    #[test]
    fn invalid_request_reports_every_field() {
        let property = Property::new("Osu Apartment", 100.0);
        let req = BookingRequest::default();
        let err = BookingService::prepare(&property, &req, date(2024, 2, 1)).expect_err("invalid");
        match err {
            ServiceError::Booking(BookingError::Validation(result)) => {
                assert!(result.issue(BookingField::GuestName).is_some());
                assert!(result.issue(BookingField::GuestEmail).is_some());
                assert!(result.issue(BookingField::CheckIn).is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn closed_listing_is_rejected() {
        let property = Property::new("Osu Apartment", 100.0)
            .with_window(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        let err = BookingService::prepare(&property, &request(), date(2024, 2, 1))
            .expect_err("closed");
        assert!(matches!(
            err,
            ServiceError::Booking(BookingError::NotAvailable { .. })
        ));
    }
}
