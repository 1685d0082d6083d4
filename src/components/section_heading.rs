use dioxus::prelude::*;
use crate::utils::use_theme;
use super::{ palette, reveal_class, use_in_view, watch_visibility };

#[component]
pub fn SectionHeading(title: String, #[props(default)] centered: bool) -> Element {
    let theme = use_theme();
    let visible = use_in_view();

    let heading_class = format!(
        "text-4xl md:text-5xl font-bold mb-4 transition-colors duration-500 {}",
        palette::heading_text(theme())
    );
    let wrapper_class = reveal_class(
        visible(),
        if centered { "mb-12 text-center" } else { "mb-12" },
        "fade-in-left"
    );
    let bar_class = reveal_class(
        visible(),
        if centered {
            "h-1 w-20 mx-auto bg-gradient-to-r from-blue-500 to-teal-400 rounded-full"
        } else {
            "h-1 w-20 bg-gradient-to-r from-blue-500 to-teal-400 rounded-full"
        },
        "grow-bar"
    );

    rsx! {
        div {
            class: wrapper_class,
            onmounted: move |event| watch_visibility(event, visible),
            h2 { class: heading_class, "{title}" }
            div { class: bar_class }
        }
    }
}
