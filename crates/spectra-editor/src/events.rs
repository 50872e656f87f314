//! Notifications the editor hands back to the host each frame

use spectra_core::{EntityId, ObjectKind};

/// Something the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// An entity became the held entity. `kind` is None for background entities.
    Selected {
        id: EntityId,
        kind: Option<ObjectKind>,
    },
    /// A click into empty space cleared the selection
    Deselected,
    /// The held entity and its descendants were removed from the scene
    Deleted { id: EntityId },
    /// Good moment for the host to drop unused assets
    ReclaimResources,
    PauseToggled { open: bool },
    HelpToggled { open: bool },
}

/// Everything that happened during one [`crate::Editor::update`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub events: Vec<EditorEvent>,
}

impl FrameReport {
    pub fn push(&mut self, event: EditorEvent) {
        self.events.push(event);
    }

    pub fn contains(&self, event: &EditorEvent) -> bool {
        self.events.contains(event)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Id of the entity selected this frame, if any
    pub fn selected(&self) -> Option<EntityId> {
        self.events.iter().find_map(|event| match event {
            EditorEvent::Selected { id, .. } => Some(*id),
            _ => None,
        })
    }
}
