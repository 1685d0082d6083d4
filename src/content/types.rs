use serde::{ Deserialize, Serialize };

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub name: String,
    pub tagline: String,
    pub skills: String,
    pub resume_url: String,
    pub photo_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    pub quote: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

/// Skills above this level get the pulsing marker.
pub const HIGHLIGHT_LEVEL: u8 = 80;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: Option<u8>,
}

impl Skill {
    pub fn is_highlighted(&self) -> bool {
        self.level.map_or(false, |level| level > HIGHLIGHT_LEVEL)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub title: String,
    pub resume_url: String,
    pub publication_url: String,
    pub publication_title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    /// Shown instead of the full LinkedIn URL.
    pub linkedin_label: String,
}
