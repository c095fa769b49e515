use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SelectFieldProps {
    pub options: Vec<String>,
    pub selected: String,
    pub placeholder: String,
    pub select_class: String,
    pub select_style: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "{props.select_class}",
            style: "{props.select_style}",
            value: "{selected}",
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            // Empty value keeps the field blank until the user picks an option
            option {
                value: "",
                disabled: true,
                selected: selected.is_empty(),
                "{props.placeholder}"
            }
            for option in props.options {
                option {
                    value: "{option}",
                    selected: option == selected,
                    "{option}"
                }
            }
        }
    }
}
