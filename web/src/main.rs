use dioxus::prelude::*;
use ui::services::config::BookingPageConfig;
use ui::BookingPage;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Book us now" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

/// Booking page driven by the configuration bundled in `ui/assets/booking_page.json`
#[component]
fn Home() -> Element {
    let config = use_hook(BookingPageConfig::bundled);

    rsx! {
        div {
            BookingPage { config }
        }
    }
}
