// Core types for the booking page - no dioxus imports needed here
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::errors::ValidationError;
use crate::services::config::BookingPageConfig;

/// Services offered on the booking form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ServiceType {
    GeneralCleaning,
    CarpetAndUpholstery,
    Industrial,
    FloorRestoration,
    FumigationAndPestControl,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::GeneralCleaning,
        ServiceType::CarpetAndUpholstery,
        ServiceType::Industrial,
        ServiceType::FloorRestoration,
        ServiceType::FumigationAndPestControl,
    ];

    /// Label shown in the select field and echoed on the summary
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::GeneralCleaning => "General Cleaning",
            ServiceType::CarpetAndUpholstery => "Carpet & Upholstery Cleaning",
            ServiceType::Industrial => "Industrial Cleaning",
            ServiceType::FloorRestoration => "Floor restoration & Cleaning",
            ServiceType::FumigationAndPestControl => "Fumigation & Pest Control",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or(ValidationError::UnknownOption)
    }
}

/// Time-of-day slots a service can be booked for
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ServiceTime {
    Morning,
    Afternoon,
    Evening,
}

impl ServiceTime {
    pub const ALL: [ServiceTime; 3] = [
        ServiceTime::Morning,
        ServiceTime::Afternoon,
        ServiceTime::Evening,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceTime::Morning => "Morning",
            ServiceTime::Afternoon => "Afternoon",
            ServiceTime::Evening => "Evening",
        }
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceTime::ALL
            .into_iter()
            .find(|time| time.label() == s)
            .ok_or(ValidationError::UnknownOption)
    }
}

/// Identifies one input on the booking form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BookingField {
    FullName,
    PhoneNumber,
    Email,
    ServiceType,
    ServiceDate,
    ServiceTime,
    Message,
}

impl BookingField {
    pub const ALL: [BookingField; 7] = [
        BookingField::FullName,
        BookingField::PhoneNumber,
        BookingField::Email,
        BookingField::ServiceType,
        BookingField::ServiceDate,
        BookingField::ServiceTime,
        BookingField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BookingField::FullName => "fullName",
            BookingField::PhoneNumber => "phoneNum",
            BookingField::Email => "email",
            BookingField::ServiceType => "serviceType",
            BookingField::ServiceDate => "date",
            BookingField::ServiceTime => "serviceTime",
            BookingField::Message => "message",
        }
    }
}

/// Raw values exactly as the inputs report them
#[derive(Clone, Default, PartialEq, Debug)]
pub struct BookingFormValues {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub service_date: String,
    pub service_time: String,
    pub message: String,
}

impl BookingFormValues {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FullName => &self.full_name,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::Email => &self.email,
            BookingField::ServiceType => &self.service_type,
            BookingField::ServiceDate => &self.service_date,
            BookingField::ServiceTime => &self.service_time,
            BookingField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::FullName => &mut self.full_name,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::Email => &mut self.email,
            BookingField::ServiceType => &mut self.service_type,
            BookingField::ServiceDate => &mut self.service_date,
            BookingField::ServiceTime => &mut self.service_time,
            BookingField::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Typed booking produced by a successful validation pass
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SubmittedBooking {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: ServiceType,
    pub service_date: NaiveDate,
    pub service_time: ServiceTime,
    pub message: String,
}

/// First failing rule of every invalid field
pub type FieldErrors = BTreeMap<BookingField, ValidationError>;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BookingView {
    #[default]
    Editing,
    Submitted,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum BookingAction {
    SetField(BookingField, String),
    Submit,
}

#[derive(Clone, Default, Debug)]
pub struct BookingState {
    pub values: BookingFormValues,
    pub errors: FieldErrors,
    pub view: BookingView,
    pub submitted: Option<SubmittedBooking>,
    pub submit_attempted: bool,
    /// Options the select fields offer, and therefore accept
    pub config: BookingPageConfig,
}
