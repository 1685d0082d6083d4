mod home;
mod hero;
mod about;
mod projects;
mod skills;
mod resume;
mod contact;

pub use home::Home;
pub use hero::HeroSection;
pub use about::AboutSection;
pub use projects::ProjectsGrid;
pub use skills::SkillsSection;
pub use resume::ResumeSection;
pub use contact::ContactSection;
