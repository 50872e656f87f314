//! Application configuration
//!
//! Editor preferences (zoom limits, key bindings, display mode) and where
//! saves are kept.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::input::{Key, PointerButton};

/// How the scene is presented
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// 2D view: dragging enabled, one screen-space panel at a time
    #[default]
    Planar,
    /// 3D view: panels float in front of the camera
    Spatial,
}

/// Orthographic zoom behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Size change per scroll unit
    pub speed: f32,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            min_size: 5.0,
            max_size: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KeyBindings {
    /// Held with the primary button: rotate towards the pointer
    pub rotate: Key,
    /// Held with the primary button: scale by pointer distance
    pub scale: Key,
    pub delete: Key,
    pub menu: Key,
    pub pan: PointerButton,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate: Key::Char('r'),
            scale: Key::Char('s'),
            delete: Key::Delete,
            menu: Key::Escape,
            pan: PointerButton::Middle,
        }
    }
}

/// Camera-relative placement of panels in spatial mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PanelPlacementConfig {
    /// Along the camera's forward axis
    pub distance: f32,
    /// Along the camera's right axis
    pub side_offset: f32,
}

impl Default for PanelPlacementConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            side_offset: 4.0,
        }
    }
}

/// Editor preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub bindings: KeyBindings,
    #[serde(default)]
    pub panel_placement: PanelPlacementConfig,
}

/// Where saves go
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveConfig {
    /// Root directory; None uses the platform data directory
    pub root: Option<PathBuf>,
    /// Session mode, the subdirectory under `saves/`
    pub mode: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            root: None,
            mode: "sandbox".to_string(),
        }
    }
}

impl SaveConfig {
    /// Configured root, or `<data dir>/spectra`
    pub fn resolved_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("spectra")
        })
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub saves: SaveConfig,
}

impl AppConfig {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.version, AppConfig::CURRENT_VERSION);
        assert_eq!(config.editor.zoom.speed, 10.0);
        assert_eq!(config.editor.zoom.min_size, 5.0);
        assert_eq!(config.editor.zoom.max_size, 20.0);
        assert_eq!(config.editor.bindings.pan, PointerButton::Middle);
        assert_eq!(config.editor.display_mode, DisplayMode::Planar);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: AppConfig = ron::from_str("(version: 1, saves: (root: None, mode: \"lab\"))")
            .expect("parse");
        assert_eq!(config.saves.mode, "lab");
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_explicit_root() {
        let saves = SaveConfig {
            root: Some(PathBuf::from("/tmp/x")),
            ..Default::default()
        };
        assert_eq!(saves.resolved_root(), PathBuf::from("/tmp/x"));
    }
}
