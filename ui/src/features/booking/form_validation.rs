//! Validation schema for the booking form.
//!
//! Every field is checked required-first, then against its format or length
//! rule. Only the first failing rule of a field is reported. Values are
//! checked and kept exactly as typed.

use chrono::NaiveDate;
use regex_lite::Regex;
use std::sync::OnceLock;

use super::errors::{ValidationError, ValidationResult};
use super::types::*;
use crate::services::config::BookingPageConfig;

pub const MESSAGE_MIN_CHARS: usize = 1;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Value format produced by `<input type="date">`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    // Local format: a leading 0 followed by ten digits
    PHONE_RE.get_or_init(|| Regex::new(r"^0[0-9]{10}$").expect("valid phone regex"))
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("valid email regex")
    })
}

fn required(raw: &str) -> ValidationResult<&str> {
    if raw.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(raw)
    }
}

/// Parses a select value and checks it is one of the options on offer
fn offered<T>(raw: &str, options: &[T]) -> ValidationResult<T>
where
    T: std::str::FromStr<Err = ValidationError> + PartialEq,
{
    let choice: T = required(raw)?.parse()?;
    if options.contains(&choice) {
        Ok(choice)
    } else {
        Err(ValidationError::UnknownOption)
    }
}

pub fn parse_full_name(raw: &str) -> ValidationResult<String> {
    required(raw).map(str::to_string)
}

pub fn parse_phone_number(raw: &str) -> ValidationResult<String> {
    let phone = required(raw)?;
    if phone_regex().is_match(phone) {
        Ok(phone.to_string())
    } else {
        Err(ValidationError::InvalidPhoneNumber)
    }
}

pub fn parse_email(raw: &str) -> ValidationResult<String> {
    let email = required(raw)?;
    if email_regex().is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn parse_service_type(raw: &str, services: &[ServiceType]) -> ValidationResult<ServiceType> {
    offered(raw, services)
}

pub fn parse_service_time(raw: &str, time_slots: &[ServiceTime]) -> ValidationResult<ServiceTime> {
    offered(raw, time_slots)
}

pub fn parse_service_date(raw: &str) -> ValidationResult<NaiveDate> {
    let date = required(raw)?;
    NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

pub fn parse_message(raw: &str) -> ValidationResult<String> {
    let message = required(raw)?;
    let length = message.chars().count();
    if length < MESSAGE_MIN_CHARS {
        return Err(ValidationError::TooShort {
            min: MESSAGE_MIN_CHARS,
        });
    }
    if length > MESSAGE_MAX_CHARS {
        return Err(ValidationError::TooLong {
            max: MESSAGE_MAX_CHARS,
        });
    }
    Ok(message.to_string())
}

/// Validates a single raw field value against the stock page options
pub fn validate_field(field: BookingField, raw: &str) -> ValidationResult<()> {
    validate_field_with(field, raw, &BookingPageConfig::default())
}

/// Validates a single raw field value; select fields must hold an option `config` offers
pub fn validate_field_with(
    field: BookingField,
    raw: &str,
    config: &BookingPageConfig,
) -> ValidationResult<()> {
    match field {
        BookingField::FullName => parse_full_name(raw).map(drop),
        BookingField::PhoneNumber => parse_phone_number(raw).map(drop),
        BookingField::Email => parse_email(raw).map(drop),
        BookingField::ServiceType => parse_service_type(raw, &config.services).map(drop),
        BookingField::ServiceDate => parse_service_date(raw).map(drop),
        BookingField::ServiceTime => parse_service_time(raw, &config.time_slots).map(drop),
        BookingField::Message => parse_message(raw).map(drop),
    }
}

fn record<T>(
    errors: &mut FieldErrors,
    field: BookingField,
    result: ValidationResult<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}

/// Runs the whole schema against the stock page options
pub fn validate_form(values: &BookingFormValues) -> Result<SubmittedBooking, FieldErrors> {
    validate_form_with(values, &BookingPageConfig::default())
}

/// Runs the whole schema, returning the typed booking or every failing field
pub fn validate_form_with(
    values: &BookingFormValues,
    config: &BookingPageConfig,
) -> Result<SubmittedBooking, FieldErrors> {
    let mut errors = FieldErrors::new();

    let full_name = record(
        &mut errors,
        BookingField::FullName,
        parse_full_name(&values.full_name),
    );
    let phone_number = record(
        &mut errors,
        BookingField::PhoneNumber,
        parse_phone_number(&values.phone_number),
    );
    let email = record(&mut errors, BookingField::Email, parse_email(&values.email));
    let service_type = record(
        &mut errors,
        BookingField::ServiceType,
        parse_service_type(&values.service_type, &config.services),
    );
    let service_date = record(
        &mut errors,
        BookingField::ServiceDate,
        parse_service_date(&values.service_date),
    );
    let service_time = record(
        &mut errors,
        BookingField::ServiceTime,
        parse_service_time(&values.service_time, &config.time_slots),
    );
    let message = record(
        &mut errors,
        BookingField::Message,
        parse_message(&values.message),
    );
    let (
        Some(full_name),
        Some(phone_number),
        Some(email),
        Some(service_type),
        Some(service_date),
        Some(service_time),
        Some(message),
    ) = (
        full_name,
        phone_number,
        email,
        service_type,
        service_date,
        service_time,
        message,
    )
    else {
        return Err(errors);
    };

    Ok(SubmittedBooking {
        full_name,
        phone_number,
        email,
        service_type,
        service_date,
        service_time,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::booking::fixtures::valid_values;

    #[test]
    fn test_blank_form_reports_required_everywhere() {
        let errors = validate_form(&BookingFormValues::default()).unwrap_err();

        assert_eq!(errors.len(), BookingField::ALL.len());
        for field in BookingField::ALL {
            assert_eq!(errors.get(&field), Some(&ValidationError::Required));
        }
    }

    #[test]
    fn test_whitespace_is_kept_as_typed() {
        // Only the empty string is missing; anything else is the user's input
        assert_eq!(validate_field(BookingField::FullName, "   "), Ok(()));
        assert_eq!(validate_field(BookingField::Message, "\n\t"), Ok(()));

        let mut values = valid_values();
        values.full_name = " Ada Obi ".to_string();
        let booking = validate_form(&values).unwrap();
        assert_eq!(booking.full_name, " Ada Obi ");
    }

    #[test]
    fn test_format_rules_see_surrounding_whitespace() {
        assert_eq!(
            validate_field(BookingField::PhoneNumber, " 09030179104"),
            Err(ValidationError::InvalidPhoneNumber)
        );
        assert_eq!(
            validate_field(BookingField::Email, "a@b.com "),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(
            validate_field(BookingField::Email, "not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_field(BookingField::Email, "two@@signs.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_field(BookingField::Email, "a@b.com"), Ok(()));
        assert_eq!(
            validate_field(BookingField::Email, "emaxj962@gmail.com"),
            Ok(())
        );
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(validate_field(BookingField::PhoneNumber, "09030179104"), Ok(()));

        // Ten digits, twelve digits, wrong leading digit, non-digits
        for bad in ["0903017910", "090301791045", "19030179104", "0903017910a"] {
            assert_eq!(
                validate_field(BookingField::PhoneNumber, bad),
                Err(ValidationError::InvalidPhoneNumber),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_message_length_bounds() {
        assert_eq!(
            validate_field(BookingField::Message, ""),
            Err(ValidationError::Required)
        );
        assert_eq!(validate_field(BookingField::Message, "x"), Ok(()));
        assert_eq!(
            validate_field(BookingField::Message, &"x".repeat(MESSAGE_MAX_CHARS)),
            Ok(())
        );
        assert_eq!(
            validate_field(BookingField::Message, &"x".repeat(MESSAGE_MAX_CHARS + 1)),
            Err(ValidationError::TooLong {
                max: MESSAGE_MAX_CHARS
            })
        );
    }

    #[test]
    fn test_message_length_counts_characters() {
        // 500 two-byte characters is still within the limit
        assert_eq!(
            validate_field(BookingField::Message, &"é".repeat(MESSAGE_MAX_CHARS)),
            Ok(())
        );
    }

    #[test]
    fn test_select_fields_accept_only_catalog_labels() {
        assert_eq!(
            validate_field(BookingField::ServiceType, "Fumigation & Pest Control"),
            Ok(())
        );
        assert_eq!(
            validate_field(BookingField::ServiceType, "Window Washing"),
            Err(ValidationError::UnknownOption)
        );
        assert_eq!(validate_field(BookingField::ServiceTime, "Afternoon"), Ok(()));
        assert_eq!(
            validate_field(BookingField::ServiceTime, "Midnight"),
            Err(ValidationError::UnknownOption)
        );
    }

    #[test]
    fn test_select_fields_respect_configured_options() {
        let config = BookingPageConfig {
            services: vec![ServiceType::Industrial],
            time_slots: vec![ServiceTime::Morning],
            ..BookingPageConfig::default()
        };

        assert_eq!(
            validate_field_with(BookingField::ServiceType, "Industrial Cleaning", &config),
            Ok(())
        );
        assert_eq!(
            validate_field_with(BookingField::ServiceType, "General Cleaning", &config),
            Err(ValidationError::UnknownOption)
        );
        assert_eq!(
            validate_field_with(BookingField::ServiceTime, "Evening", &config),
            Err(ValidationError::UnknownOption)
        );

        let errors = validate_form_with(&valid_values(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&BookingField::ServiceTime),
            Some(&ValidationError::UnknownOption)
        );
    }

    #[test]
    fn test_service_date_rules() {
        assert_eq!(validate_field(BookingField::ServiceDate, "2023-02-14"), Ok(()));
        assert_eq!(
            validate_field(BookingField::ServiceDate, "2023-02-30"),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            validate_field(BookingField::ServiceDate, "14/02/2023"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_valid_form_produces_typed_booking() {
        let booking = validate_form(&valid_values()).unwrap();

        assert_eq!(booking.full_name, "Ada Obi");
        assert_eq!(booking.phone_number, "09030179104");
        assert_eq!(booking.email, "a@b.com");
        assert_eq!(booking.service_type, ServiceType::Industrial);
        assert_eq!(
            booking.service_date,
            NaiveDate::from_ymd_opt(2023, 2, 14).unwrap()
        );
        assert_eq!(booking.service_time, ServiceTime::Evening);
        assert_eq!(booking.message, "Please bring ladders");
    }

    #[test]
    fn test_only_failing_fields_are_reported() {
        let mut values = valid_values();
        values.email = "not-an-email".to_string();
        values.phone_number = "12345".to_string();

        let errors = validate_form(&values).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(&BookingField::Email),
            Some(&ValidationError::InvalidEmail)
        );
        assert_eq!(
            errors.get(&BookingField::PhoneNumber),
            Some(&ValidationError::InvalidPhoneNumber)
        );
    }
}
