use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct InertLinkProps {
    pub label: String,
}

/// Link styled as an action that does not navigate anywhere yet
#[component]
pub fn InertLink(props: InertLinkProps) -> Element {
    rsx! {
        a {
            class: "summary-link",
            href: "",
            onclick: move |evt: MouseEvent| evt.prevent_default(),
            "{props.label}"
        }
    }
}
