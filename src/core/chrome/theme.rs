use crate::domain::model::Theme;
use crate::domain::ports::{KeyValueStore, ThemeView};
use crate::utils::error::Result;

pub const THEME_KEY: &str = "theme";

/// Light/dark switch backed by durable storage.
pub struct ThemeManager<S: KeyValueStore, V: ThemeView> {
    theme: Theme,
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: ThemeView> ThemeManager<S, V> {
    /// Reads the stored preference and applies it to the page.
    pub fn new(store: S, view: V) -> Self {
        let theme = Theme::parse(store.get(THEME_KEY).as_deref());
        let mut manager = Self { theme, store, view };
        manager.apply();
        manager
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, persists it, then applies it. The page is updated even
    /// when persisting fails; the error is returned for logging.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        let saved = self.store.set(THEME_KEY, self.theme.as_str());
        self.apply();

        if let Err(e) = &saved {
            tracing::warn!("Theme preference not persisted: {}", e);
        }
        saved.map(|_| self.theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply(&mut self) {
        tracing::debug!("🎨 Theme: {}", self.theme.as_str());
        self.view.set_theme_attribute(self.theme.as_str());
        self.view.set_toggle_icon(self.theme.icon());
    }
}
