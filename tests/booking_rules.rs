mod common;

use common::{date, guest_request};
use stay_core::{
    core::{compute_quote, is_passport_required, validate, ValidationKind},
    domain::{BookingField, VisaPosture},
    errors::BookingError,
};

#[test]
fn quote_counts_calendar_nights() {
    let quote = compute_quote(date(2024, 3, 1), date(2024, 3, 4), 100.0).unwrap();
    assert_eq!(quote.nights, 3);
    assert_eq!(quote.total_price, 300.0);

    let leap = compute_quote(date(2024, 2, 28), date(2024, 3, 1), 80.0).unwrap();
    assert_eq!(leap.nights, 2);
}

#[test]
fn quote_is_repeatable() {
    let first = compute_quote(date(2024, 12, 30), date(2025, 1, 2), 33.33).unwrap();
    let second = compute_quote(date(2024, 12, 30), date(2025, 1, 2), 33.33).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total_price.to_bits(), second.total_price.to_bits());
}

#[test]
fn quote_rejects_empty_stay() {
    let err = compute_quote(date(2024, 3, 1), date(2024, 3, 1), 100.0).expect_err("empty stay");
    assert_eq!(
        err,
        BookingError::InvalidDateRange {
            start: date(2024, 3, 1),
            end: date(2024, 3, 1),
        }
    );
}

#[test]
fn passport_only_for_needs_help_with_letter() {
    let mut required = Vec::new();
    for posture in VisaPosture::ALL {
        for wants in [true, false] {
            if is_passport_required(posture, wants) {
                required.push((posture, wants));
            }
        }
    }
    assert_eq!(required, vec![(VisaPosture::NeedsHelp, true)]);
}

#[test]
fn missing_passport_number_is_the_only_issue() {
    let mut request = guest_request();
    request.visa_posture = VisaPosture::NeedsHelp;
    request.wants_invitation_letter = true;
    request.passport_number = Some("   ".into());
    request.passport_country = Some("Nigeria".into());
    request.passport_expiry = Some(date(2026, 1, 1));

    let result = validate(&request);
    assert!(!result.is_ok());
    assert_eq!(result.fields().collect::<Vec<_>>(), vec![BookingField::PassportNumber]);
    assert_eq!(
        result.issue(BookingField::PassportNumber).map(|issue| issue.kind),
        Some(ValidationKind::MissingRequiredField)
    );
}

#[test]
fn validation_is_repeatable() {
    let request = guest_request();
    assert!(validate(&request).is_ok());
    assert_eq!(validate(&request), validate(&request));
}
