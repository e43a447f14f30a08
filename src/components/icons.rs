use dioxus::prelude::*;

use crate::utils::ThemeMode;

/// Which glyph the theme control shows. The icon names the mode a click
/// switches to, so a dark page shows the sun and a light page the moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemeIcon::Moon,
            ThemeMode::Dark => ThemeIcon::Sun,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "Switch to light mode",
            ThemeIcon::Moon => "Switch to dark mode",
        }
    }
}

#[component]
pub fn ThemeIconView(icon: ThemeIcon, onclick: EventHandler<MouseEvent>) -> Element {
    let (name, glyph) = match icon {
        ThemeIcon::Sun => ("sun", rsx! { SunIcon {} }),
        ThemeIcon::Moon => ("moon", rsx! { MoonIcon {} }),
    };

    rsx! {
        span {
            class: "theme-icon",
            title: icon.label(),
            "data-icon": name,
            onclick: move |evt| onclick.call(evt),
            {glyph}
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-sun",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "5" }
            line { x1: "12", y1: "1", x2: "12", y2: "3" }
            line { x1: "12", y1: "21", x2: "12", y2: "23" }
            line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
            line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
            line { x1: "1", y1: "12", x2: "3", y2: "12" }
            line { x1: "21", y1: "12", x2: "23", y2: "12" }
            line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
            line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-moon",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
    }
}

#[component]
pub fn BarsIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-bars",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            line { x1: "3", y1: "6", x2: "21", y2: "6" }
            line { x1: "3", y1: "12", x2: "21", y2: "12" }
            line { x1: "3", y1: "18", x2: "21", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-close",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}
