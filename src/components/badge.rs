use dioxus::prelude::*;
use crate::utils::use_theme;
use super::{ palette, reveal_class, use_in_view, watch_visibility };

#[component]
pub fn Badge(label: String, #[props(default)] highlighted: bool, #[props(default)] delay_ms: u32) -> Element {
    let theme = use_theme();
    let visible = use_in_view();
    let base = format!(
        "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium hover:scale-105 transition-transform duration-200 {} {}",
        palette::glass_panel(theme()),
        theme().pick("text-slate-700", "text-slate-200")
    );

    rsx! {
        span {
            class: reveal_class(visible(), &base, "pop-in"),
            style: "animation-delay: {delay_ms}ms;",
            onmounted: move |event| watch_visibility(event, visible),
            "{label}"
            if highlighted {
                span { class: "ml-2 inline-block w-2 h-2 rounded-full bg-gradient-to-r from-blue-500 to-teal-500 pulse-dot" }
            }
        }
    }
}
