//! Static portfolio content.
//!
//! Everything the sections display lives in `assets/content.json`, which is
//! compiled into the binary and parsed on first access.

mod types;
mod links;

pub use types::*;
pub use links::{ encode_uri_component, ContactItem, ContactKind };

use serde::{ Deserialize, Serialize };
use thiserror::Error;

const BUNDLED_CONTENT: &str = include_str!("../../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub projects_title: String,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub resume: ResumeContent,
    pub contact_title: String,
    pub contact: ContactInfo,
}

lazy_static::lazy_static! {
    static ref BUNDLED: Portfolio = Portfolio::from_json(BUNDLED_CONTENT).unwrap_or_else(|e| {
        log::error!("{}; rendering without content", e);
        Portfolio::default()
    });
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Content shipped with the site.
    pub fn bundled() -> &'static Portfolio {
        &BUNDLED
    }
}
