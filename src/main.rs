use dioxus::prelude::*;
use portfolio::{ init_logging, Route, ThemeStore };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    init_logging();
    log::info!("Starting portfolio");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_signal(ThemeStore::new);
    use_context_provider(|| store);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
