use std::fmt::{ Debug, Formatter };
use super::preference::PreferenceStorage;
use super::system_signal::SystemThemeSignal;
use super::ThemeState;

/// Where the theme a store started with came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialSource {
    Persisted,
    System,
    Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemeState)>;

/// Owner of the session's theme.
///
/// The value is decided once in [`ThemeStore::initialize`] and afterwards
/// only changes through [`ThemeStore::toggle`], which notifies subscribers
/// synchronously and then writes the new value back to storage. Storage
/// failures never change what [`ThemeStore::theme`] returns.
pub struct ThemeStore {
    theme: ThemeState,
    source: InitialSource,
    key: String,
    storage: Box<dyn PreferenceStorage>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ThemeStore {
    /// Resolves the starting theme: the persisted value under `key`, then
    /// the system signal, then [`ThemeState::Light`].
    pub fn initialize(
        key: impl Into<String>,
        storage: Box<dyn PreferenceStorage>,
        signal: &dyn SystemThemeSignal
    ) -> Self {
        let key = key.into();
        let (theme, source) = match Self::persisted(storage.as_ref(), &key) {
            Some(theme) => (theme, InitialSource::Persisted),
            None =>
                match signal.preferred() {
                    Some(theme) => (theme, InitialSource::System),
                    None => (ThemeState::default(), InitialSource::Default),
                }
        };
        log::info!("Theme initialized to {} ({:?})", theme, source);

        Self {
            theme,
            source,
            key,
            storage,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    fn persisted(storage: &dyn PreferenceStorage, key: &str) -> Option<ThemeState> {
        match storage.read(key) {
            Ok(Some(value)) =>
                match value.parse() {
                    Ok(theme) => Some(theme),
                    Err(e) => {
                        log::debug!("Ignoring stored theme preference: {}", e);
                        None
                    }
                }
            Ok(None) => None,
            Err(e) => {
                log::debug!("Theme preference unreadable, falling back: {}", e);
                None
            }
        }
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn initial_source(&self) -> InitialSource {
        self.source
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&mut self) -> ThemeState {
        self.theme = self.theme.toggled();
        log::debug!("Theme toggled to {}", self.theme);

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(self.theme);
        }

        if let Err(e) = self.storage.write(&self.key, self.theme.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }

        self.theme
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Debug for ThemeStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("source", &self.source)
            .field("key", &self.key)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
