use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };

/// The active display mode of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// Class for the root element; Tailwind keys its `dark:` variants off it.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeState::Light => "",
            ThemeState::Dark => "dark",
        }
    }

    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            ThemeState::Light => light,
            ThemeState::Dark => dark,
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeState::Light),
            "dark" => Ok(ThemeState::Dark),
            other => Err(format!("Unknown theme: {:?}", other)),
        }
    }
}
