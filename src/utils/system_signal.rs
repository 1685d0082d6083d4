use super::ThemeState;

/// Read-only view of the platform's light/dark preference.
pub trait SystemThemeSignal {
    /// `None` when the platform expresses no preference.
    fn preferred(&self) -> Option<ThemeState>;
}

/// A signal that always reports the same answer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedSignal(pub Option<ThemeState>);

impl SystemThemeSignal for FixedSignal {
    fn preferred(&self) -> Option<ThemeState> {
        self.0
    }
}

/// OS appearance setting, for native builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsThemeSignal;

#[cfg(not(target_arch = "wasm32"))]
impl SystemThemeSignal for OsThemeSignal {
    fn preferred(&self) -> Option<ThemeState> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(ThemeState::Dark),
            dark_light::Mode::Light => Some(ThemeState::Light),
        }
    }
}

/// The browser's `prefers-color-scheme` media feature.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySignal;

#[cfg(target_arch = "wasm32")]
impl MediaQuerySignal {
    fn matches(query: &str) -> bool {
        web_sys
            ::window()
            .and_then(|window| window.match_media(query).ok().flatten())
            .map_or(false, |list| list.matches())
    }
}

#[cfg(target_arch = "wasm32")]
impl SystemThemeSignal for MediaQuerySignal {
    fn preferred(&self) -> Option<ThemeState> {
        if Self::matches("(prefers-color-scheme: dark)") {
            Some(ThemeState::Dark)
        } else if Self::matches("(prefers-color-scheme: light)") {
            Some(ThemeState::Light)
        } else {
            None
        }
    }
}
