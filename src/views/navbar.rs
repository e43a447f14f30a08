use dioxus::prelude::*;
use crate::components::{ BarsIcon, CloseIcon, ThemeIcon, ThemeIconView };
use crate::hooks::use_root_class;
use crate::routes::Route;
use crate::utils::{ MenuControl, SideMenu, ThemeStore };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

pub const BRAND: &str = "V";
pub const BRAND_SUFFIX: &str = "Kr.";
pub const NAV_ITEMS: [&str; 5] = ["Home", "About", "Skills", "Projects", "Contacts"];
pub const HIRE_ME: &str = "Hire Me";

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut store = use_context::<Signal<ThemeStore>>();
    let mut side_menu = use_signal(SideMenu::default);

    use_root_class(store);

    let icon = ThemeIcon::for_mode(store.read().mode());
    let panel_class = if side_menu.read().is_open() {
        "side-menu open"
    } else {
        "side-menu"
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                id: "navbar",
                class: "navbar",
                h2 {
                    class: "brand",
                    "{BRAND} "
                    span { class: "brand-suffix", "{BRAND_SUFFIX}" }
                }
                ul {
                    class: "nav-items",
                    for item in NAV_ITEMS {
                        li { key: "{item}", "{item}" }
                    }
                }
                ThemeIconView {
                    icon,
                    onclick: move |_| {
                        let mode = store.write().toggle();
                        log::info!("Theme switched to {}", mode);
                    },
                }
                button { class: "hire-me", "{HIRE_ME}" }
                span {
                    class: "menu-bars",
                    onclick: move |_| side_menu.write().press(MenuControl::Bars),
                    BarsIcon {}
                }
                ul {
                    class: panel_class,
                    span {
                        class: "menu-close",
                        onclick: move |_| side_menu.write().press(MenuControl::Close),
                        CloseIcon {}
                    }
                    for item in NAV_ITEMS {
                        li { key: "{item}", class: "side-menu-item", "{item}" }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
