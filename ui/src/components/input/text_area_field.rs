use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaFieldProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub textarea_class: String,
    pub textarea_style: String,
    #[props(default = 5)]
    pub rows: u32,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    rsx! {
        textarea {
            id: "{props.id}",
            class: "{props.textarea_class}",
            style: "{props.textarea_style}",
            rows: "{props.rows}",
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
