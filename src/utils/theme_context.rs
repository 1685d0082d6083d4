use dioxus::prelude::*;
use crate::configs::theme_storage_key;
use super::platform::{ default_signal, default_storage };
use super::{ ThemeState, ThemeStore };

/// Creates the session's theme store and provides it, together with a
/// reactive mirror of its value, to every descendant.
///
/// Must be called once, from the root component.
pub fn use_theme_provider() -> (Signal<ThemeStore>, Signal<ThemeState>) {
    use_theme_provider_with(|| {
        let signal = default_signal();
        ThemeStore::initialize(theme_storage_key(), default_storage(), signal.as_ref())
    })
}

/// Like [`use_theme_provider`], with the store built by `init`. `init` runs
/// on the first render only.
pub fn use_theme_provider_with(
    init: impl FnOnce() -> ThemeStore
) -> (Signal<ThemeStore>, Signal<ThemeState>) {
    let (store, theme) = use_hook(|| {
        let mut store = init();

        let mut theme = Signal::new(store.theme());
        store.subscribe(move |next| theme.set(next));

        #[cfg(target_arch = "wasm32")]
        {
            apply_root_class(store.theme());
            store.subscribe(apply_root_class);
        }

        (Signal::new(store), theme)
    });

    use_context_provider(|| store);
    use_context_provider(|| theme);
    (store, theme)
}

/// The current theme; reading it subscribes the calling component.
pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

pub fn use_theme_store() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

#[cfg(target_arch = "wasm32")]
fn apply_root_class(theme: ThemeState) {
    let root = web_sys
        ::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let classes = root.class_list();
        let result = if theme.is_dark() { classes.add_1("dark") } else { classes.remove_1("dark") };
        if let Err(e) = result {
            log::warn!("Failed to update root theme class: {:?}", e);
        }
    }
}
