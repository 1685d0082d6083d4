mod theme_state;
mod theme_store;
mod theme_context;
mod system_signal;
pub mod preference;
pub mod platform;

pub use theme_state::ThemeState;
pub use theme_store::{ InitialSource, SubscriptionId, ThemeStore };
pub use theme_context::{ use_theme, use_theme_provider, use_theme_provider_with, use_theme_store };
pub use system_signal::{ FixedSignal, SystemThemeSignal };
#[cfg(not(target_arch = "wasm32"))]
pub use system_signal::OsThemeSignal;
#[cfg(target_arch = "wasm32")]
pub use system_signal::MediaQuerySignal;
pub use preference::{ MemoryStorage, PreferenceStorage };
