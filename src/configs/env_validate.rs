pub const DEFAULT_THEME_STORAGE_KEY: &str = "portfolio-theme";
const THEME_KEY_VAR: &str = "PORTFOLIO_THEME_KEY";

/// Key the theme preference is persisted under.
///
/// Looks at the runtime environment (native builds, `.env` included), then
/// the value baked in at build time, then the default.
pub fn theme_storage_key() -> String {
    let runtime = std::env::var(THEME_KEY_VAR).ok();
    resolve_storage_key(runtime.as_deref(), option_env!("PORTFOLIO_THEME_KEY"))
}

pub fn resolve_storage_key(runtime: Option<&str>, build_time: Option<&str>) -> String {
    let key = [runtime, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty());

    match key {
        Some(key) => {
            log::debug!("Using theme storage key from {}: {}", THEME_KEY_VAR, key);
            key.to_string()
        }
        None => DEFAULT_THEME_STORAGE_KEY.to_string(),
    }
}
