use dioxus::prelude::*;
use crate::components::{ palette, reveal_class, use_in_view, watch_visibility, InView, SectionHeading };
use crate::content::{ ContactInfo, ContactItem, Portfolio };
use crate::utils::{ use_theme, ThemeState };

#[component]
pub fn ContactSection(
    #[props(default = Portfolio::bundled().contact_title.clone())] title: String,
    #[props(default = Portfolio::bundled().contact.clone())] contact: ContactInfo
) -> Element {
    let theme = use_theme();
    let theme = theme();

    let section_class = format!("py-20 px-4 md:px-8 {}", palette::page_background(theme));
    let panel_class = format!(
        "rounded-3xl ios-shadow p-8 md:p-12 relative overflow-hidden {}",
        palette::glass_panel(theme)
    );
    let intro_class = format!(
        "text-xl max-w-2xl mx-auto leading-relaxed -mt-6 text-center {}",
        palette::body_text(theme)
    );

    rsx! {
        section { class: section_class,
            InView { class: "max-w-4xl mx-auto",
                div { class: panel_class,
                    div { class: "absolute top-0 right-0 w-48 h-48 bg-gradient-to-br from-teal-400/10 to-blue-400/10 rounded-full blur-3xl" }
                    div { class: "absolute bottom-0 left-0 w-36 h-36 bg-gradient-to-tr from-purple-400/10 to-pink-400/10 rounded-full blur-2xl" }

                    div { class: "relative space-y-12",
                        div {
                            SectionHeading { title, centered: true }
                            p { class: intro_class,
                                "Let's connect and discuss how we can work together on exciting projects."
                            }
                        }

                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            for (index, item) in contact.items().into_iter().enumerate() {
                                ContactCard { key: "{item.kind.label()}", item: item.clone(), index, theme }
                            }
                        }

                        InView { class: "text-center pt-8 delay-800", reveal: "pop-in",
                            a {
                                href: contact.mailto_href(),
                                class: "inline-flex items-center bg-gradient-to-r from-blue-600 via-purple-600 to-teal-500 hover:from-blue-700 hover:via-purple-700 hover:to-teal-600 text-white rounded-2xl px-10 py-6 text-lg font-semibold ios-shadow hover:ios-shadow-lg hover:scale-105 active:scale-95 transition-all duration-500",
                                span { class: "mr-3", "✉" }
                                "Get In Touch"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactCard(item: ContactItem, index: usize, theme: ThemeState) -> Element {
    let visible = use_in_view();
    let card_class = format!(
        "rounded-2xl p-6 ios-shadow hover:ios-shadow-lg transition-all duration-500 h-full {}",
        palette::glass_panel(theme)
    );
    let label_class = format!(
        "text-lg font-semibold mb-1 group-hover:gradient-text transition-all duration-300 {}",
        palette::heading_text(theme)
    );
    let value_class = format!("text-sm truncate {}", palette::body_text(theme));
    let icon_class = format!(
        "w-12 h-12 rounded-xl bg-gradient-to-r {} flex items-center justify-center flex-shrink-0 text-white text-xl font-bold",
        item.kind.gradient()
    );

    rsx! {
        div {
            class: reveal_class(visible(), "group hover:-translate-y-1 hover:scale-[1.02] transition-transform duration-300", "fade-up"),
            style: palette::stagger(400, 100, index),
            onmounted: move |event| watch_visibility(event, visible),
            div { class: card_class,
                div { class: "flex items-center space-x-4",
                    div { class: icon_class, "{item.kind.icon()}" }
                    div { class: "flex-1 min-w-0",
                        h3 { class: label_class, "{item.kind.label()}" }
                        p { class: value_class, "{item.value}" }
                    }
                    a {
                        href: "{item.href}",
                        target: item.target(),
                        rel: item.rel(),
                        class: "rounded-full p-2 hover:bg-white/50",
                        title: "{item.kind.label()}",
                        "↗"
                    }
                }
            }
        }
    }
}
