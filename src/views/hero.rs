use dioxus::prelude::*;
use crate::components::palette;
use crate::content::{ HeroContent, Portfolio };
use crate::utils::use_theme;

#[component]
pub fn HeroSection(#[props(default = Portfolio::bundled().hero.clone())] hero: HeroContent) -> Element {
    let theme = use_theme();
    let theme = theme();

    let section_class = format!(
        "relative min-h-screen w-full flex items-center justify-center overflow-hidden {}",
        palette::page_background(theme)
    );
    let greeting_class = format!(
        "text-xl md:text-2xl font-light tracking-wide fade-in-left delay-300 {}",
        theme.pick("text-slate-600", "text-slate-400")
    );
    let name_class = format!(
        "text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight leading-none {}",
        palette::heading_text(theme)
    );
    let tagline_class = format!(
        "text-xl md:text-2xl lg:text-3xl font-medium leading-tight {}",
        theme.pick("text-slate-700", "text-slate-300")
    );
    let skills_class = format!(
        "text-lg md:text-xl font-medium tracking-wider {}",
        palette::muted_text(theme)
    );

    rsx! {
        section { class: section_class,
            div { class: "absolute inset-0",
                div { class: "absolute top-1/4 -left-20 w-96 h-96 bg-gradient-to-r from-blue-400/20 to-purple-400/20 rounded-full blur-3xl orbit-slow" }
                div { class: "absolute bottom-1/4 -right-20 w-80 h-80 bg-gradient-to-r from-teal-400/20 to-cyan-400/20 rounded-full blur-3xl orbit-reverse" }
                div { class: "absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 w-64 h-64 bg-gradient-to-r from-pink-400/10 to-orange-400/10 rounded-full blur-3xl breathe" }
            }

            div { class: "relative z-10 w-full max-w-5xl mx-auto px-6 py-12 md:py-20 fade-up",
                div { class: "liquid-glass rounded-3xl ios-shadow-lg p-8 md:p-16 relative overflow-hidden",
                    div { class: "absolute inset-0 bg-gradient-to-br from-white/10 to-transparent rounded-3xl" }

                    div { class: "relative flex flex-col lg:flex-row items-center gap-12 lg:gap-16",
                        div { class: "flex-shrink-0 fade-in-left delay-200",
                            div { class: "relative",
                                div { class: "w-64 h-64 md:w-80 md:h-80 rounded-3xl overflow-hidden liquid-glass ios-shadow-lg hover:scale-105 hover:rotate-2 transition-transform duration-300",
                                    img {
                                        src: "{hero.photo_url}",
                                        alt: "{hero.name}",
                                        class: "w-full h-full object-cover",
                                    }
                                }
                                div { class: "absolute -top-4 -right-4 w-8 h-8 bg-gradient-to-r from-blue-500 to-teal-500 rounded-full bob" }
                                div { class: "absolute -bottom-6 -left-6 w-12 h-12 bg-gradient-to-r from-purple-500 to-pink-500 rounded-2xl opacity-80 orbit-slow" }
                            }
                        }

                        div { class: "flex-1 space-y-8 md:space-y-12 text-center lg:text-left",
                            div { class: greeting_class, "Hi, I'm" }

                            div { class: "space-y-4 md:space-y-6 fade-up delay-500",
                                h1 { class: name_class,
                                    span { class: "gradient-text", "{hero.name}" }
                                    " —"
                                }
                                h2 { class: tagline_class, "{hero.tagline}" }
                            }

                            div { class: "pt-4 fade-up delay-700",
                                p { class: skills_class, "{hero.skills}" }
                            }

                            div { class: "pt-8 md:pt-12 pop-in delay-900",
                                a {
                                    href: "{hero.resume_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "inline-flex items-center bg-gradient-to-r from-blue-600 via-purple-600 to-teal-500 hover:from-blue-700 hover:via-purple-700 hover:to-teal-600 text-white rounded-2xl px-8 py-6 text-lg font-semibold ios-shadow hover:ios-shadow-lg hover:scale-105 active:scale-95 transition-all duration-500",
                                    span { class: "mr-3", "⬇" }
                                    "Download Resume"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "absolute bottom-12 left-1/2 transform -translate-x-1/2 fade-in delay-1500",
                div { class: "w-7 h-12 rounded-full border-2 border-slate-400/60 flex justify-center pt-3 backdrop-blur-sm bg-white/20 bob",
                    div { class: "w-2 h-4 bg-gradient-to-b from-blue-500 to-teal-500 rounded-full bob" }
                }
            }
        }
    }
}
