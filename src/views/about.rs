use dioxus::prelude::*;
use crate::components::{ palette, InView, SectionHeading };
use crate::content::{ AboutContent, Portfolio };
use crate::utils::use_theme;

#[component]
pub fn AboutSection(#[props(default = Portfolio::bundled().about.clone())] about: AboutContent) -> Element {
    let theme = use_theme();
    let theme = theme();

    let section_class = format!("py-20 px-4 md:px-8 {}", palette::page_background(theme));
    let description_class = format!(
        "text-lg md:text-xl leading-relaxed {}",
        palette::body_text(theme)
    );
    let quote_class = format!(
        "liquid-glass rounded-2xl p-6 md:p-8 border {}",
        theme.pick("border-slate-200/50", "border-slate-700/50")
    );

    rsx! {
        section { class: section_class,
            InView { class: "max-w-4xl mx-auto",
                div { class: "liquid-glass rounded-3xl ios-shadow p-8 md:p-12 relative overflow-hidden",
                    div { class: "absolute top-0 right-0 w-32 h-32 bg-gradient-to-br from-blue-400/10 to-teal-400/10 rounded-full blur-2xl" }
                    div { class: "absolute bottom-0 left-0 w-24 h-24 bg-gradient-to-tr from-purple-400/10 to-pink-400/10 rounded-full blur-2xl" }

                    div { class: "relative space-y-8",
                        SectionHeading { title: about.title.clone() }
                        InView { class: "delay-400",
                            p { class: description_class, "{about.description}" }
                        }
                        InView { class: "relative delay-600", reveal: "pop-in",
                            div { class: quote_class,
                                div { class: "text-3xl text-blue-500 mb-2", "\"" }
                                p { class: "text-xl md:text-2xl font-medium gradient-text italic leading-relaxed",
                                    "{about.quote}"
                                }
                                div { class: "text-3xl text-teal-500 text-right", "\"" }
                            }
                        }
                    }
                }
            }
        }
    }
}
