//! Durable theme and sound preferences.

use crate::domain::{AppError, Preferences, Theme};
use crate::ports::KeyValueStore;
use crate::services::persisted;

pub const THEME_KEY: &str = "ai-art-prompt-theme";
pub const SOUND_KEY: &str = "ai-art-prompt-sound";

#[derive(Debug)]
pub struct PreferenceState<S: KeyValueStore> {
    store: S,
    preferences: Preferences,
}

impl<S: KeyValueStore> PreferenceState<S> {
    /// Restore from storage; each setting falls back to its default on its own.
    pub fn load(store: S) -> Self {
        let defaults = Preferences::default();
        let theme = persisted::load_or_default::<Option<Theme>, _>(&store, THEME_KEY)
            .unwrap_or(defaults.theme);
        let sound_enabled = persisted::load_or_default::<Option<bool>, _>(&store, SOUND_KEY)
            .unwrap_or(defaults.sound_enabled);
        Self { store, preferences: Preferences { theme, sound_enabled } }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.preferences.theme = theme;
        persisted::save(&self.store, THEME_KEY, &theme)
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) -> Result<(), AppError> {
        self.preferences.sound_enabled = enabled;
        persisted::save(&self.store, SOUND_KEY, &enabled)
    }
}
