//! Field-level validation for booking requests.
//!
//! Every rule runs on every call so the form can show all problems at once.
//! A field keeps the first issue raised against it.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    core::visa::is_passport_required,
    domain::{BookingField, BookingRequest},
    errors::BookingError,
};

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Classifies why a field was rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    MissingRequiredField,
    InvalidFormat,
    InvalidDateRange,
    InvalidPassportExpiry,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: ValidationKind,
    pub message: String,
}

/// Outcome of validating a request: empty means the request may be submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<BookingField, ValidationIssue>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<BookingField, ValidationIssue> {
        &self.errors
    }

    pub fn issue(&self, field: BookingField) -> Option<&ValidationIssue> {
        self.errors.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = BookingField> + '_ {
        self.errors.keys().copied()
    }

    /// Converts a failing result into `BookingError::Validation`.
    pub fn into_result(self) -> Result<(), BookingError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(BookingError::Validation(self))
        }
    }

    fn reject(&mut self, field: BookingField, kind: ValidationKind, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| ValidationIssue {
            kind,
            message: message.into(),
        });
    }

    /// Records a typed booking error against `field`, using its text as the message.
    fn reject_error(&mut self, field: BookingField, error: BookingError) {
        let kind = match &error {
            BookingError::MissingRequiredField(_) => ValidationKind::MissingRequiredField,
            BookingError::InvalidDateRange { .. } => ValidationKind::InvalidDateRange,
            BookingError::InvalidPassportExpiry { .. } => ValidationKind::InvalidPassportExpiry,
            _ => ValidationKind::InvalidFormat,
        };
        self.reject(field, kind, error.to_string());
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("ok");
        }
        let rendered: Vec<String> = self
            .errors
            .iter()
            .map(|(field, issue)| format!("{}: {}", field, issue.message))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

/// Validates guest input before any persistence attempt.
pub fn validate(request: &BookingRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    check_name(&mut result, &request.guest_name);
    check_email(&mut result, &request.guest_email);
    check_phone(&mut result, &request.guest_phone);
    check_dates(&mut result, request.check_in, request.check_out);

    if is_passport_required(request.visa_posture, request.wants_invitation_letter) {
        check_passport(&mut result, request);
    }

    result
}

fn check_name(result: &mut ValidationResult, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        result.reject(
            BookingField::GuestName,
            ValidationKind::MissingRequiredField,
            "Name is required",
        );
    } else if name.chars().count() < MIN_NAME_LEN {
        result.reject(
            BookingField::GuestName,
            ValidationKind::InvalidFormat,
            format!("Name must be at least {MIN_NAME_LEN} characters"),
        );
    }
}

fn check_email(result: &mut ValidationResult, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        result.reject(
            BookingField::GuestEmail,
            ValidationKind::MissingRequiredField,
            "Email address is required",
        );
    } else if !EMAIL_PATTERN.is_match(email) {
        result.reject(
            BookingField::GuestEmail,
            ValidationKind::InvalidFormat,
            "Invalid email address",
        );
    }
}

fn check_phone(result: &mut ValidationResult, phone: &str) {
    if phone.trim().is_empty() {
        result.reject(
            BookingField::GuestPhone,
            ValidationKind::MissingRequiredField,
            "Phone number is required",
        );
        return;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        result.reject(
            BookingField::GuestPhone,
            ValidationKind::InvalidFormat,
            "Invalid phone number",
        );
    }
}

fn check_dates(
    result: &mut ValidationResult,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) {
    match (check_in, check_out) {
        (Some(start), Some(end)) if end <= start => {
            result.reject_error(BookingField::CheckOut, BookingError::InvalidDateRange { start, end })
        }
        (start, end) => {
            if start.is_none() {
                result.reject_error(
                    BookingField::CheckIn,
                    BookingError::MissingRequiredField(BookingField::CheckIn),
                );
            }
            if end.is_none() {
                result.reject_error(
                    BookingField::CheckOut,
                    BookingError::MissingRequiredField(BookingField::CheckOut),
                );
            }
        }
    }
}

fn check_passport(result: &mut ValidationResult, request: &BookingRequest) {
    const MESSAGE: &str = "Passport details are required for a visa invitation.";

    if is_blank(request.passport_number.as_deref()) {
        result.reject(
            BookingField::PassportNumber,
            ValidationKind::MissingRequiredField,
            MESSAGE,
        );
    }
    if is_blank(request.passport_country.as_deref()) {
        result.reject(
            BookingField::PassportCountry,
            ValidationKind::MissingRequiredField,
            MESSAGE,
        );
    }
    match (request.passport_expiry, request.check_out) {
        (None, _) => result.reject(
            BookingField::PassportExpiry,
            ValidationKind::MissingRequiredField,
            MESSAGE,
        ),
        (Some(expiry), Some(check_out)) if expiry <= check_out => result.reject_error(
            BookingField::PassportExpiry,
            BookingError::InvalidPassportExpiry { expiry, check_out },
        ),
        _ => {}
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
