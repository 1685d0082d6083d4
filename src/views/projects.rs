use dioxus::prelude::*;
use crate::components::{ palette, reveal_class, use_in_view, watch_visibility, Badge, SectionHeading };
use crate::content::{ Portfolio, Project };
use crate::utils::{ use_theme, ThemeState };

#[component]
pub fn ProjectsGrid(
    #[props(default = Portfolio::bundled().projects.clone())] projects: Vec<Project>,
    #[props(default = Portfolio::bundled().projects_title.clone())] title: String
) -> Element {
    let theme = use_theme();
    let hovered = use_signal(|| None::<String>);
    let section_class = format!("w-full py-20 {}", palette::page_background(theme()));

    rsx! {
        section { class: section_class,
            div { class: "container mx-auto px-4",
                SectionHeading { title }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for (index, project) in projects.into_iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            index,
                            hovered,
                            theme: theme(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, mut hovered: Signal<Option<String>>, theme: ThemeState) -> Element {
    let visible = use_in_view();
    let is_hovered = hovered.read().as_deref() == Some(project.id.as_str());
    let enter_id = project.id.clone();

    let card_class = format!(
        "h-full overflow-hidden rounded-2xl ios-shadow hover:ios-shadow-lg transition-all duration-500 flex flex-col {}",
        palette::glass_panel(theme)
    );
    let title_class = format!(
        "text-xl font-bold group-hover:gradient-text transition-all duration-300 {}",
        palette::heading_text(theme)
    );
    let description_class = format!("mb-6 leading-relaxed {}", palette::body_text(theme));
    let code_class = format!(
        "flex-1 inline-flex items-center justify-center rounded-xl px-3 py-2 text-sm glass {}",
        palette::outline_button(theme)
    );

    rsx! {
        div {
            class: reveal_class(visible(), "group hover:-translate-y-2 hover:scale-[1.02] transition-transform duration-300", "fade-up"),
            style: palette::stagger(0, 100, index),
            onmounted: move |event| watch_visibility(event, visible),
            onmouseenter: move |_| hovered.set(Some(enter_id.clone())),
            onmouseleave: move |_| hovered.set(None),

            div { class: card_class,
                div { class: "relative h-56 overflow-hidden",
                    img {
                        src: "{project.image}",
                        alt: "{project.title}",
                        class: if is_hovered {
                            "w-full h-full object-cover scale-110 transition-transform duration-700 ease-out"
                        } else {
                            "w-full h-full object-cover scale-100 transition-transform duration-700 ease-out"
                        },
                    }
                    div { class: "absolute inset-0 bg-gradient-to-t from-black/70 via-black/20 to-transparent" }

                    div {
                        class: if is_hovered {
                            "absolute top-4 right-4 flex gap-2 opacity-100 scale-100 transition-all duration-300"
                        } else {
                            "absolute top-4 right-4 flex gap-2 opacity-0 scale-90 transition-all duration-300"
                        },
                        if let Some(url) = project.github_url.clone() {
                            a {
                                href: url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "rounded-full glass w-9 h-9 flex items-center justify-center text-slate-800",
                                title: "Source code",
                                "</>"
                            }
                        }
                        if let Some(url) = project.demo_url.clone() {
                            a {
                                href: url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "rounded-full bg-gradient-to-r from-blue-500 to-teal-500 w-9 h-9 flex items-center justify-center text-white",
                                title: "Live demo",
                                "↗"
                            }
                        }
                    }
                }

                div { class: "px-6 pt-6 pb-3",
                    h3 { class: title_class, "{project.title}" }
                }

                div { class: "px-6 pb-4 flex-1",
                    p { class: description_class, "{project.description}" }
                    div { class: "flex flex-wrap gap-2",
                        for (tech_index, tech) in project.technologies.iter().enumerate() {
                            Badge {
                                key: "{tech_index}",
                                label: tech.name.trim().to_string(),
                                delay_ms: palette::delay_ms(0, 50, tech_index),
                            }
                        }
                    }
                }

                div { class: "px-6 pb-6 flex gap-2 w-full",
                    if let Some(url) = project.github_url.clone() {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: code_class,
                            span { class: "mr-2", "</>" }
                            "Code"
                        }
                    }
                    if let Some(url) = project.demo_url.clone() {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "flex-1 inline-flex items-center justify-center rounded-xl px-3 py-2 text-sm text-white bg-gradient-to-r from-blue-500 to-teal-500",
                            span { class: "mr-2", "↗" }
                            "Demo"
                        }
                    }
                }
            }
        }
    }
}
