use dioxus::prelude::*;
use crate::components::{ palette, Badge, InView, SectionHeading };
use crate::content::{ Portfolio, SkillCategory };
use crate::utils::use_theme;

#[component]
pub fn SkillsSection(
    #[props(default = Portfolio::bundled().skill_categories.clone())] categories: Vec<SkillCategory>
) -> Element {
    let theme = use_theme();
    let theme = theme();

    let section_class = format!("py-20 px-4 md:px-8 min-h-[700px] {}", palette::page_background(theme));
    let card_class = format!(
        "rounded-2xl p-6 ios-shadow hover:ios-shadow-lg transition-all duration-500 h-full relative overflow-hidden {}",
        palette::glass_panel(theme)
    );
    let name_class = format!(
        "text-xl font-bold mb-6 group-hover:gradient-text transition-all duration-300 {}",
        palette::heading_text(theme)
    );

    rsx! {
        section { class: section_class,
            InView { class: "max-w-6xl mx-auto",
                SectionHeading { title: "Skills" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for (index, category) in categories.iter().enumerate() {
                        InView {
                            key: "{category.name}",
                            class: "group hover:-translate-y-1 hover:scale-[1.02] transition-transform duration-300",
                            style: palette::stagger(0, 150, index),
                            div { class: card_class.clone(),
                                div { class: "absolute top-0 right-0 w-20 h-20 bg-gradient-to-br from-blue-400/10 to-teal-400/10 rounded-full blur-xl group-hover:scale-150 transition-transform duration-500" }
                                div { class: "relative",
                                    if let Some(icon) = category.icon.as_deref() {
                                        div { class: "text-3xl mb-4", "{icon}" }
                                    }
                                    h3 { class: name_class.clone(), "{category.name}" }
                                    div { class: "flex flex-wrap gap-2",
                                        for (skill_index, skill) in category.skills.iter().enumerate() {
                                            Badge {
                                                key: "{skill.name}",
                                                label: skill.name.clone(),
                                                highlighted: skill.is_highlighted(),
                                                delay_ms: palette::delay_ms(0, 50, skill_index),
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
    }
}
