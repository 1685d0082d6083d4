use dioxus::prelude::*;
use crate::utils::{ use_theme, use_theme_store };

/// Floating light/dark switch.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let mut store = use_theme_store();

    rsx! {
        button {
            class: "fixed top-6 right-6 z-50 w-14 h-14 rounded-2xl liquid-glass ios-shadow hover:ios-shadow-lg hover:scale-105 active:scale-95 transition-all duration-500 flex items-center justify-center group pop-in toggle-delay",
            title: theme().pick("Switch to dark mode", "Switch to light mode"),
            onclick: move |_| {
                store.write().toggle();
            },
            span {
                class: "text-2xl spin-in",
                if theme().is_dark() {
                    "🌞"
                } else {
                    "🌙"
                }
            }
        }
    }
}
