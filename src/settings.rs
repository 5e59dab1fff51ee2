//! Player preferences
//!
//! Read from LocalStorage on the web (the portfolio page writes them).

use serde::{Deserialize, Serialize};

/// Host-side preferences. None of these change simulation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Input ===
    /// `KeyboardEvent.code` values that trigger a jump
    pub jump_keys: Vec<String>,
    /// Tap/click on the canvas jumps while a run is active
    pub pointer_jump: bool,
    /// Tap/click on the canvas starts a run when none is active
    pub click_to_start: bool,

    // === Visuals ===
    /// Background mountain ranges
    pub show_mountains: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jump_keys: vec!["Space".to_string(), "ArrowUp".to_string()],
            pointer_jump: false,
            click_to_start: true,
            show_mountains: true,
        }
    }
}

impl Settings {
    /// Does this key code trigger a jump?
    pub fn is_jump_key(&self, code: &str) -> bool {
        self.jump_keys.iter().any(|k| k == code)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "byu_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jump_keys() {
        let settings = Settings::default();
        assert!(settings.is_jump_key("Space"));
        assert!(settings.is_jump_key("ArrowUp"));
        assert!(!settings.is_jump_key("KeyW"));
        assert!(!settings.is_jump_key("space"));
    }

    #[test]
    fn test_partial_json() {
        let settings: Settings =
            serde_json::from_str(r#"{ "jump_keys": ["KeyW"], "show_mountains": false }"#).unwrap();
        assert!(settings.is_jump_key("KeyW"));
        assert!(!settings.is_jump_key("Space"));
        assert!(!settings.show_mountains);
        assert!(settings.click_to_start);
    }

    #[test]
    fn test_json_roundtrip_keeps_bindings() {
        let settings = Settings {
            pointer_jump: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
    }
}
