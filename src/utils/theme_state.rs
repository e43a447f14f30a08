use std::fmt::{Display, Formatter};

/// The site-wide colour scheme. Each variant doubles as the class token
/// placed on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(ThemeMode)>;

/// Owns the current [`ThemeMode`] for the session and the observers that
/// must hear about every change.
///
/// The store is handed to the view tree through context rather than living
/// in a global. Observers run synchronously inside [`ThemeStore::toggle`],
/// in the order they subscribed, so they must not reach back into the
/// signal that wraps the store.
pub struct ThemeStore {
    mode: ThemeMode,
    observers: Vec<(Subscription, Observer)>,
    next_id: u64,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::default(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode, notifies every observer and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let previous = self.mode;
        self.mode = previous.toggled();
        log::debug!("Theme toggled: {} -> {}", previous, self.mode);

        let mode = self.mode;
        for (_, observer) in self.observers.iter_mut() {
            observer(mode);
        }
        mode
    }

    /// Registers an observer for future changes. It is not called with the
    /// current mode.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription where F: FnMut(ThemeMode) + 'static {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Returns `false` when the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        before != self.observers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
