use dioxus::prelude::*;

const DISCOUNT_STAR: Asset = asset!("/assets/img/discount_star.svg");

#[derive(Props, PartialEq, Clone)]
pub struct HeroBannerProps {
    pub headline: String,
    pub discount_text: String,
}

#[component]
pub fn HeroBanner(props: HeroBannerProps) -> Element {
    rsx! {
        section {
            class: "booking-hero",
            div {
                class: "booking-hero-inner",
                h1 {
                    class: "booking-hero-title",
                    "{props.headline}"
                }
            }
        }

        section {
            class: "discount-banner",
            p {
                class: "discount-banner-text",
                img {
                    class: "discount-banner-icon",
                    src: DISCOUNT_STAR,
                    alt: ""
                }
                span { "{props.discount_text}" }
            }
        }
    }
}
