//! Spectra Editor
//!
//! Direct manipulation of optical elements and scene persistence:
//! - Editor: per-frame selection, drag, rotate, scale, pan and zoom
//! - Panels: which property panel is shown for the held entity
//! - Persistence: save directories, preview capture, loading saves
//! - Config: editor preferences stored as RON

pub mod camera;
pub mod config;
pub mod editor;
pub mod events;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod picking;
pub mod state;

pub use camera::{Projection, Ray, ViewCamera};
pub use config::{AppConfig, ConfigManager, DisplayMode, EditorConfig, SharedConfig};
pub use editor::{Editor, EditorContext, SharedEditor};
pub use events::{EditorEvent, FrameReport};
pub use input::{ButtonState, InputSnapshot, Key, PointerButton};
pub use panels::{Panel, PanelPlacement, PanelSet};
pub use persistence::{CaptureSink, SaveError, SaveManager, SessionContext};
pub use picking::{BoundsPicker, ScenePicker};
pub use state::{EditorSession, Gesture, GestureMode};
