pub mod views;
pub mod components;
mod utils;
pub mod content;
mod configs;
mod tests;
mod error;

pub use crate::utils::*;
pub use crate::configs::{ theme_storage_key, DEFAULT_THEME_STORAGE_KEY };
pub use crate::error::PersistenceError;
