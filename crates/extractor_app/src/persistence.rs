use extractor_core::ThemeMode;
use extractor_engine::PreferenceStore;
use extractor_logging::{extractor_error, extractor_info, extractor_warn};

pub(crate) const THEME_KEY: &str = "themeMode";

pub(crate) fn load_theme_mode(store: &PreferenceStore) -> ThemeMode {
    match store.get(THEME_KEY) {
        None => ThemeMode::default(),
        Some(value) => value.parse().unwrap_or_else(|err| {
            extractor_warn!("Ignoring stored theme preference: {}", err);
            ThemeMode::default()
        }),
    }
}

pub(crate) fn save_theme_mode(store: &mut PreferenceStore, mode: ThemeMode) {
    match store.set(THEME_KEY, mode.as_str()) {
        Ok(()) => extractor_info!("Saved theme mode {} to {:?}", mode, store.path()),
        Err(err) => extractor_error!("Failed to save theme mode: {}", err),
    }
}
