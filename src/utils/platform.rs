use super::preference::PreferenceStorage;
use super::system_signal::SystemThemeSignal;

/// Durable preference storage for the current target.
pub fn default_storage() -> Box<dyn PreferenceStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(super::preference::LocalStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match super::preference::FileStorage::default_path() {
            Ok(path) => {
                log::debug!("Theme preference file: {}", path.display());
                Box::new(super::preference::FileStorage::new(path))
            }
            Err(e) => {
                log::warn!("{}; theme preference will not outlive this session", e);
                Box::new(super::preference::MemoryStorage::new())
            }
        }
    }
}

/// System light/dark signal for the current target.
pub fn default_signal() -> Box<dyn SystemThemeSignal> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(super::system_signal::MediaQuerySignal)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(super::system_signal::OsThemeSignal)
    }
}
