//! Page configuration for the booking page
//!
//! Holds the copy and option lists the page renders. `Default` reproduces
//! the stock page; a JSON document can override any subset of keys.

use serde::{Deserialize, Serialize};

use crate::features::booking::{ServiceTime, ServiceType};

/// Page configuration shipped with the app
pub const BUNDLED_PAGE_CONFIG: &str = include_str!("../../../assets/booking_page.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPageConfig {
    /// Headline shown in the hero section
    pub headline: String,

    /// Website booking discount advertised under the hero
    pub discount_percent: u8,

    /// Services offered in the "Service Type" select, in display order
    pub services: Vec<ServiceType>,

    /// Slots offered in the "Service Time" select, in display order
    pub time_slots: Vec<ServiceTime>,
}

impl Default for BookingPageConfig {
    fn default() -> Self {
        Self {
            headline: "Book us now".to_string(),
            discount_percent: 12,
            services: ServiceType::ALL.to_vec(),
            time_slots: ServiceTime::ALL.to_vec(),
        }
    }
}

impl BookingPageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses `json`, falling back to the stock page when it is malformed or invalid
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config.or_default(),
            Err(e) => {
                crate::console_warn!("Could not parse booking page configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn bundled() -> Self {
        Self::from_json_or_default(BUNDLED_PAGE_CONFIG)
    }

    pub fn discount_banner(&self) -> String {
        format!(
            "Enjoy {}% discount when booking from our website",
            self.discount_percent
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.services.is_empty() {
            return Err("services must offer at least one option".to_string());
        }

        if self.time_slots.is_empty() {
            return Err("time_slots must offer at least one option".to_string());
        }

        if self.discount_percent > 100 {
            return Err(format!(
                "discount_percent must be at most 100, got {}",
                self.discount_percent
            ));
        }

        Ok(())
    }

    /// Returns this configuration if it validates, the defaults otherwise
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                crate::console_warn!("Invalid booking page configuration: {}", e);
                Self::default()
            }
        }
    }
}
