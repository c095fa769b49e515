use dioxus::prelude::*;

use crate::components::input::{
    Button, ButtonType, FieldErrorFeedback, InputType, SelectField, TextAreaField, ValidatedInput,
};
use crate::features::booking::{BookingAction, BookingField, BookingState};
use crate::services::config::BookingPageConfig;
use crate::utils::validation::{field_class, field_style};

const BOOKING_CHECK: Asset = asset!("/assets/img/booking_check.svg");

#[derive(Props, PartialEq, Clone)]
pub struct BookingFormProps {
    pub state: Signal<BookingState>,
    pub dispatch: EventHandler<BookingAction>,
}

#[component]
pub fn BookingForm(props: BookingFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = use_context::<BookingPageConfig>();

    let service_options: Vec<String> = config
        .services
        .iter()
        .map(|service| service.label().to_string())
        .collect();
    let time_options: Vec<String> = config
        .time_slots
        .iter()
        .map(|slot| slot.label().to_string())
        .collect();

    let current = state();
    let values = current.values.clone();
    let error = |field: BookingField| current.error_for(field);

    let full_name_error = error(BookingField::FullName);
    let phone_error = error(BookingField::PhoneNumber);
    let email_error = error(BookingField::Email);
    let service_type_error = error(BookingField::ServiceType);
    let date_error = error(BookingField::ServiceDate);
    let service_time_error = error(BookingField::ServiceTime);
    let message_error = error(BookingField::Message);

    let set_field = move |field: BookingField| {
        move |value: String| dispatch.call(BookingAction::SetField(field, value))
    };

    rsx! {
        section {
            class: "booking-form-container",

            div {
                class: "booking-intro",
                div {
                    class: "booking-intro-heading",
                    img {
                        class: "booking-intro-icon",
                        src: BOOKING_CHECK,
                        alt: ""
                    }
                    span {
                        class: "booking-intro-title",
                        "Ready to book our services?"
                    }
                }
                p {
                    class: "booking-intro-text",
                    "It's easy! Simply fill out the form below with your contact information and the details of the services you need. Our team will be in touch with you promptly to confirm your booking and answer any questions you may have."
                }
            }

            form {
                class: "booking-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(BookingAction::Submit);
                },

                div {
                    class: "booking-form-columns",

                    div {
                        class: "booking-form-column",
                        h3 { class: "form-section-title", "Personal Details" }

                        div {
                            class: "input-section",
                            ValidatedInput {
                                value: values.full_name.clone(),
                                placeholder: "Full name".to_string(),
                                input_type: InputType::Text,
                                input_class: field_class("input-field", full_name_error.as_deref()),
                                input_style: field_style(full_name_error.as_deref()).to_string(),
                                required: true,
                                on_change: set_field(BookingField::FullName)
                            }
                            FieldErrorFeedback { error: full_name_error.clone() }
                        }

                        div {
                            class: "input-section",
                            ValidatedInput {
                                value: values.phone_number.clone(),
                                placeholder: "Phone Number".to_string(),
                                input_type: InputType::Tel,
                                input_class: field_class("input-field", phone_error.as_deref()),
                                input_style: field_style(phone_error.as_deref()).to_string(),
                                required: true,
                                on_change: set_field(BookingField::PhoneNumber)
                            }
                            FieldErrorFeedback { error: phone_error.clone() }
                        }

                        div {
                            class: "input-section",
                            ValidatedInput {
                                value: values.email.clone(),
                                placeholder: "Email Address".to_string(),
                                input_type: InputType::Email,
                                input_class: field_class("input-field", email_error.as_deref()),
                                input_style: field_style(email_error.as_deref()).to_string(),
                                required: true,
                                on_change: set_field(BookingField::Email)
                            }
                            FieldErrorFeedback { error: email_error.clone() }
                        }
                    }

                    div {
                        class: "booking-form-column",
                        h3 { class: "form-section-title", "Select date, time & services" }

                        div {
                            class: "input-section",
                            SelectField {
                                options: service_options,
                                selected: values.service_type.clone(),
                                placeholder: "Service Type".to_string(),
                                select_class: field_class("select-field", service_type_error.as_deref()),
                                select_style: field_style(service_type_error.as_deref()).to_string(),
                                on_change: set_field(BookingField::ServiceType)
                            }
                            FieldErrorFeedback { error: service_type_error.clone() }
                        }

                        div {
                            class: "input-section",
                            ValidatedInput {
                                value: values.service_date.clone(),
                                placeholder: "Select Date".to_string(),
                                input_type: InputType::Date,
                                input_class: field_class("input-field", date_error.as_deref()),
                                input_style: field_style(date_error.as_deref()).to_string(),
                                required: true,
                                on_change: set_field(BookingField::ServiceDate)
                            }
                            FieldErrorFeedback { error: date_error.clone() }
                        }

                        div {
                            class: "input-section",
                            SelectField {
                                options: time_options,
                                selected: values.service_time.clone(),
                                placeholder: "Service Time".to_string(),
                                select_class: field_class("select-field", service_time_error.as_deref()),
                                select_style: field_style(service_time_error.as_deref()).to_string(),
                                on_change: set_field(BookingField::ServiceTime)
                            }
                            FieldErrorFeedback { error: service_time_error.clone() }
                        }
                    }
                }

                div {
                    class: "input-section",
                    TextAreaField {
                        id: "message".to_string(),
                        value: values.message.clone(),
                        placeholder: "message".to_string(),
                        textarea_class: field_class("textarea-field", message_error.as_deref()),
                        textarea_style: field_style(message_error.as_deref()).to_string(),
                        on_change: set_field(BookingField::Message)
                    }
                    FieldErrorFeedback { error: message_error.clone() }
                }

                div {
                    class: "button-section",
                    Button {
                        button_type: ButtonType::Submit,
                        "Proceed to confirm booking"
                    }
                }
            }
        }
    }
}
