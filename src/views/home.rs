use dioxus::prelude::*;
use crate::components::{ palette, ThemeToggle };
use crate::utils::use_theme;
use super::{ AboutSection, ContactSection, HeroSection, ProjectsGrid, ResumeSection, SkillsSection };

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let class = format!("min-h-screen transition-colors duration-500 {}", palette::page_background(theme()));

    rsx! {
        div { class,
            ThemeToggle {}
            HeroSection {}
            AboutSection {}
            ProjectsGrid {}
            SkillsSection {}
            ResumeSection {}
            ContactSection {}
        }
    }
}
