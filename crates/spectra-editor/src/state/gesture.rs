//! Pointer gesture on the held entity

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gesture in progress while the primary button is down.
///
/// A press always starts in `Dragging`. Holding a modifier switches to
/// `Rotating` or `Scaling` and the drag does not resume before release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Plain translation, keeping `offset` between entity and pointer
    Dragging { offset: Vec3 },
    Rotating,
    /// Snapshot taken on the frame scaling started
    Scaling {
        initial_distance: f32,
        initial_scale: Vec3,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn mode(&self) -> GestureMode {
        match self {
            Gesture::Idle => GestureMode::Idle,
            Gesture::Dragging { .. } => GestureMode::Dragging,
            Gesture::Rotating => GestureMode::Rotating,
            Gesture::Scaling { .. } => GestureMode::Scaling,
        }
    }
}

/// Coarse editor state, as reported to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    Dragging,
    Rotating,
    Scaling,
    Panning,
}

impl GestureMode {
    pub fn name(&self) -> &'static str {
        match self {
            GestureMode::Idle => "Idle",
            GestureMode::Dragging => "Dragging",
            GestureMode::Rotating => "Rotating",
            GestureMode::Scaling => "Scaling",
            GestureMode::Panning => "Panning",
        }
    }
}
