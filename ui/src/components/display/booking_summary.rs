use dioxus::prelude::*;

use crate::components::input::{Button, InertLink};
use crate::features::booking::BookingSummary;

#[derive(Props, PartialEq, Clone)]
pub struct BookingSummaryCardProps {
    pub summary: BookingSummary,
}

/// Read-only booking details shown once the form has been submitted
#[component]
pub fn BookingSummaryCard(props: BookingSummaryCardProps) -> Element {
    let summary = props.summary;

    rsx! {
        section {
            class: "booking-summary",
            div {
                class: "booking-summary-card",
                h2 {
                    class: "booking-summary-title",
                    "Booking Details"
                }

                div {
                    class: "summary-group contact",
                    p { class: "summary-label", "Name" }
                    div {
                        class: "summary-row",
                        p { class: "summary-value", "{summary.full_name}" }
                        InertLink { label: "Edit".to_string() }
                    }
                    p { class: "summary-label", "Email Address" }
                    p { class: "summary-value wrap", "{summary.email}" }
                    p { class: "summary-label", "Phone Number" }
                    p { class: "summary-value", "{summary.phone_number}" }
                }

                div {
                    class: "summary-group service",
                    p { class: "summary-label", "Service Type" }
                    div {
                        class: "summary-row",
                        p { class: "summary-value", "{summary.service_type}" }
                        InertLink { label: "Change".to_string() }
                    }
                    p { class: "summary-label", "Service Date" }
                    p { class: "summary-value", "{summary.service_date}" }
                    p { class: "summary-label", "Service Time" }
                    p { class: "summary-value", "{summary.service_time}" }
                }

                Button {
                    class: "primary-button full-width".to_string(),
                    "Proceed to confirm booking"
                }
            }
        }
    }
}
