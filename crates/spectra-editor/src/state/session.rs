//! Per-scene editing session

use glam::Vec3;
use spectra_core::EntityId;

use super::gesture::{Gesture, GestureMode};
use super::menu::MenuState;

/// State that lives for one visit to the editing scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    held: Option<EntityId>,
    pub(crate) gesture: Gesture,
    /// World point grabbed when panning started
    pub(crate) pan_anchor: Option<Vec3>,
    pub(crate) menu: MenuState,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to idle with nothing held, no pan and menus closed
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn held(&self) -> Option<EntityId> {
        self.held
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Entity gestures take precedence over panning when both are active
    pub fn mode(&self) -> GestureMode {
        match self.gesture {
            Gesture::Idle if self.is_panning() => GestureMode::Panning,
            gesture => gesture.mode(),
        }
    }

    pub(crate) fn hold(&mut self, id: EntityId) {
        self.held = Some(id);
    }

    /// Drop the held entity and end any gesture on it
    pub(crate) fn release_held(&mut self) {
        self.held = None;
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut session = EditorSession::new();
        session.hold(EntityId::new());
        session.gesture = Gesture::Rotating;
        session.pan_anchor = Some(Vec3::ONE);
        session.menu.toggle_pause();

        session.reset();
        assert_eq!(session, EditorSession::default());
        assert_eq!(session.mode(), GestureMode::Idle);
    }

    #[test]
    fn test_mode_reports_panning() {
        let mut session = EditorSession::new();
        session.pan_anchor = Some(Vec3::ZERO);
        assert_eq!(session.mode(), GestureMode::Panning);

        session.gesture = Gesture::Rotating;
        assert_eq!(session.mode(), GestureMode::Rotating);
    }
}
