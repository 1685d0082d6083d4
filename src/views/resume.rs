use dioxus::prelude::*;
use crate::components::{ palette, InView, SectionHeading };
use crate::content::{ Portfolio, ResumeContent };
use crate::utils::use_theme;

#[component]
pub fn ResumeSection(#[props(default = Portfolio::bundled().resume.clone())] resume: ResumeContent) -> Element {
    let theme = use_theme();
    let theme = theme();

    let section_class = format!("py-20 px-4 md:px-8 {}", palette::page_background(theme));
    let panel_class = format!(
        "rounded-3xl ios-shadow p-8 md:p-12 relative overflow-hidden {}",
        palette::glass_panel(theme)
    );
    let card_class = format!(
        "rounded-2xl p-6 ios-shadow hover:ios-shadow-lg transition-all duration-500 h-full {}",
        palette::glass_panel(theme)
    );
    let card_title_class = format!(
        "text-xl font-bold group-hover:gradient-text transition-all duration-300 {}",
        palette::heading_text(theme)
    );
    let card_text_class = format!("mb-6 leading-relaxed {}", palette::body_text(theme));
    let open_class = format!(
        "inline-flex items-center justify-center rounded-xl px-4 py-2 glass {}",
        palette::outline_button(theme)
    );

    rsx! {
        section { class: section_class,
            InView { class: "max-w-4xl mx-auto",
                div { class: panel_class,
                    div { class: "absolute top-0 right-0 w-40 h-40 bg-gradient-to-br from-purple-400/10 to-pink-400/10 rounded-full blur-2xl" }
                    div { class: "absolute bottom-0 left-0 w-32 h-32 bg-gradient-to-tr from-blue-400/10 to-teal-400/10 rounded-full blur-2xl" }

                    div { class: "relative space-y-8",
                        SectionHeading { title: resume.title.clone() }

                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                            InView { class: "group delay-400 hover:-translate-y-1 hover:scale-[1.02] transition-transform duration-300",
                                div { class: card_class.clone(),
                                    div { class: "flex items-center mb-4",
                                        div { class: "w-12 h-12 rounded-xl bg-gradient-to-r from-blue-500 to-teal-500 flex items-center justify-center mr-4 text-white text-xl",
                                            "📄"
                                        }
                                        h3 { class: card_title_class.clone(), "Resume" }
                                    }
                                    p { class: card_text_class.clone(),
                                        "Download my complete resume with detailed information about my experience, education, and projects."
                                    }
                                    div { class: "flex gap-3",
                                        a {
                                            href: "{resume.resume_url}",
                                            download: "",
                                            class: "flex-1 inline-flex items-center justify-center rounded-xl px-4 py-2 text-white bg-gradient-to-r from-blue-500 to-teal-500 hover:from-blue-600 hover:to-teal-600",
                                            span { class: "mr-2", "⬇" }
                                            "Download"
                                        }
                                        a {
                                            href: "{resume.resume_url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: open_class,
                                            "↗"
                                        }
                                    }
                                }
                            }

                            InView { class: "group delay-600 hover:-translate-y-1 hover:scale-[1.02] transition-transform duration-300",
                                div { class: card_class,
                                    div { class: "flex items-center mb-4",
                                        div { class: "w-12 h-12 rounded-xl bg-gradient-to-r from-purple-500 to-pink-500 flex items-center justify-center mr-4 text-white text-xl",
                                            "↗"
                                        }
                                        h3 { class: card_title_class, "Publication" }
                                    }
                                    p { class: card_text_class,
                                        "{resume.publication_title} - Research work published in a peer-reviewed journal."
                                    }
                                    a {
                                        href: "{resume.publication_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "w-full inline-flex items-center justify-center rounded-xl px-4 py-2 text-white bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600",
                                        span { class: "mr-2", "↗" }
                                        "View Publication"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
