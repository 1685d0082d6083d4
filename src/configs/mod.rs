pub mod env_validate;

pub use env_validate::{ theme_storage_key, DEFAULT_THEME_STORAGE_KEY };
