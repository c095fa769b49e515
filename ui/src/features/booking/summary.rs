use chrono::NaiveDate;

use super::types::SubmittedBooking;

pub const FALLBACK_FULL_NAME: &str = "Joseph Emmanuel";
pub const FALLBACK_EMAIL: &str = "emaxj962@gmail.com";
pub const FALLBACK_PHONE_NUMBER: &str = "090 301 79104";
pub const FALLBACK_SERVICE_TYPE: &str = "General Cleaning";
pub const FALLBACK_SERVICE_DATE: &str = "14 Feb, 2023";
pub const FALLBACK_SERVICE_TIME: &str = "Morning";

/// Display text for the booking details card
#[derive(Clone, PartialEq, Debug)]
pub struct BookingSummary {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub service_type: String,
    pub service_date: String,
    pub service_time: String,
}

impl BookingSummary {
    /// Builds the summary from the last submission, using placeholder copy
    /// when nothing has been submitted
    pub fn from_submission(submission: Option<&SubmittedBooking>) -> Self {
        match submission {
            Some(booking) => Self {
                full_name: booking.full_name.clone(),
                email: booking.email.clone(),
                phone_number: booking.phone_number.clone(),
                service_type: booking.service_type.label().to_string(),
                service_date: format_service_date(booking.service_date),
                service_time: booking.service_time.label().to_string(),
            },
            None => Self::default(),
        }
    }
}

impl Default for BookingSummary {
    fn default() -> Self {
        Self {
            full_name: FALLBACK_FULL_NAME.to_string(),
            email: FALLBACK_EMAIL.to_string(),
            phone_number: FALLBACK_PHONE_NUMBER.to_string(),
            service_type: FALLBACK_SERVICE_TYPE.to_string(),
            service_date: FALLBACK_SERVICE_DATE.to_string(),
            service_time: FALLBACK_SERVICE_TIME.to_string(),
        }
    }
}

/// "<day> <month>, <year>", e.g. "14 Feb, 2023"
pub fn format_service_date(date: NaiveDate) -> String {
    date.format("%d %b, %Y").to_string()
}
