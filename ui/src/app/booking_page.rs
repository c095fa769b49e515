use dioxus::prelude::*;

use crate::components::display::{BookingSummaryCard, HeroBanner};
use crate::components::forms::BookingForm;
use crate::features::booking::{BookingAction, BookingState, BookingSummary};
use crate::services::config::BookingPageConfig;

const BOOKING_PAGE_CSS: Asset = asset!("/assets/styling/booking_page.css");

#[derive(Props, PartialEq, Clone)]
pub struct BookingPageProps {
    /// Page copy and option lists; the stock page is used when absent
    #[props(default)]
    pub config: BookingPageConfig,
}

#[component]
pub fn BookingPage(props: BookingPageProps) -> Element {
    let config = use_context_provider(|| props.config.clone().or_default());

    let initial_config = config.clone();
    let mut state = use_signal(move || BookingState::with_config(initial_config));

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: BookingAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BOOKING_PAGE_CSS }

        HeroBanner {
            headline: config.headline.clone(),
            discount_text: config.discount_banner()
        }

        if state().is_submitted() {
            BookingSummaryCard {
                summary: BookingSummary::from_submission(state().submitted.as_ref())
            }
        } else {
            BookingForm {
                state: state,
                dispatch: dispatch
            }
        }
    }
}
