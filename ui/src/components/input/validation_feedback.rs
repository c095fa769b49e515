use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub error: Option<String>,
}

/// Inline message rendered beneath a field that failed validation
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                role: "alert",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
