use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "home",
            section {
                id: "home",
                class: "hero",
                h1 { class: "hero-title", "Hi, I'm V Kr." }
                p { class: "hero-subtitle", "Welcome to my portfolio." }
            }
        }
    }
}
