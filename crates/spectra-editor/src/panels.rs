//! Property panels opened for the held entity
//!
//! The editor only decides which panel is shown and when; drawing and
//! editing the properties is up to the host's [`Panel`] implementations.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use spectra_core::{Entity, PanelKind};

/// World-space placement of a floating panel (spatial display mode)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub position: Vec3,
    pub rotation: Quat,
}

/// A property panel for one kind of entity
pub trait Panel {
    /// Populate the panel from the entity's current properties
    fn load_data(&mut self, entity: &Entity);

    fn set_active(&mut self, active: bool);

    fn is_active(&self) -> bool;

    /// Move the panel in world space. Panels that live in screen space ignore this.
    fn place(&mut self, _placement: PanelPlacement) {}
}

/// The registered panels, at most one per kind
#[derive(Default)]
pub struct PanelSet {
    panels: HashMap<PanelKind, Box<dyn Panel>>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: PanelKind, panel: impl Panel + 'static) -> Self {
        self.insert(kind, panel);
        self
    }

    /// Register a panel, replacing any previous one of the same kind
    pub fn insert(&mut self, kind: PanelKind, panel: impl Panel + 'static) {
        self.panels.insert(kind, Box::new(panel));
    }

    pub fn get(&self, kind: PanelKind) -> Option<&dyn Panel> {
        self.panels.get(&kind).map(|p| p.as_ref())
    }

    pub fn get_mut(&mut self, kind: PanelKind) -> Option<&mut (dyn Panel + 'static)> {
        self.panels.get_mut(&kind).map(|p| p.as_mut())
    }

    pub fn close_all(&mut self) {
        for panel in self.panels.values_mut() {
            panel.set_active(false);
        }
    }

    /// Load `entity` into the panel of `kind`, place it if a placement is
    /// given, then activate it. Returns false if no such panel is registered.
    pub fn open(
        &mut self,
        kind: PanelKind,
        entity: &Entity,
        placement: Option<PanelPlacement>,
    ) -> bool {
        let Some(panel) = self.get_mut(kind) else {
            tracing::debug!("No {} panel registered", kind.name());
            return false;
        };

        panel.load_data(entity);
        if let Some(placement) = placement {
            panel.place(placement);
        }
        panel.set_active(true);
        true
    }

    /// Kinds of the panels currently active, in declaration order
    pub fn active(&self) -> Vec<PanelKind> {
        PanelKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some_and(|p| p.is_active()))
            .collect()
    }
}
