use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug, Default)]
pub enum ButtonType {
    Submit,
    #[default]
    Button,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Button => "button",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    #[props(default)]
    pub button_type: ButtonType,
    #[props(default = "primary-button".to_string())]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.class}",
            r#type: "{props.button_type.as_str()}",
            {props.children}
        }
    }
}
