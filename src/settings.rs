//! Game settings and preferences
//!
//! Persisted to LocalStorage on the web target; defaults everywhere else.
//! These are presentation preferences only - gameplay is not configurable.

use serde::{Deserialize, Serialize};

use crate::renderer::Palette;

/// Game settings/preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    /// Show the FPS readout in the HUD
    pub show_fps: bool,
    /// High contrast palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_settings";

    /// The palette the current settings select
    pub fn palette(&self) -> Palette {
        if self.high_contrast {
            Palette::high_contrast()
        } else {
            Palette::standard()
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_pick_standard_palette() {
        let settings = Settings::default();
        assert!(!settings.high_contrast);
        assert_eq!(
            settings.palette().background,
            Palette::standard().background
        );
    }

    #[test]
    fn test_high_contrast_switches_palette() {
        let settings = Settings {
            high_contrast: true,
            ..Settings::default()
        };
        assert_eq!(
            settings.palette().background,
            Palette::high_contrast().background
        );
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings {
            show_fps: true,
            high_contrast: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.show_fps, settings.show_fps);
        assert_eq!(back.high_contrast, settings.high_contrast);
    }
}
