use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Date => "date",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub input_style: String,
    #[props(default)]
    pub required: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled input for the booking form's free-text fields.
///
/// Name, phone number, email and service date all render through this
/// component. The form state owns the value and each keystroke goes out
/// through `on_change`, so the booking reducer can re-validate the field. Phone
/// numbers use `InputType::Tel` so the leading `0` is kept. `InputType::Date`
/// renders the browser date picker, which reports `YYYY-MM-DD`.
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            "aria-required": "{props.required}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
