//! Object classification
//!
//! Maps the capability markers of an entity to its optical kind and the
//! property panel that edits it.

use serde::{Deserialize, Serialize};

use crate::entity::Capabilities;

/// Optical kind of a scene entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Light,
    Lens,
    Prism,
    Mirror,
    Custom,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Light => "Light",
            ObjectKind::Lens => "Lens",
            ObjectKind::Prism => "Prism",
            ObjectKind::Mirror => "Mirror",
            ObjectKind::Custom => "Custom",
        }
    }

    /// Panel that edits entities of this kind
    pub fn panel(&self) -> PanelKind {
        match self {
            ObjectKind::Light => PanelKind::Light,
            ObjectKind::Lens => PanelKind::Lens,
            ObjectKind::Prism => PanelKind::Prism,
            ObjectKind::Mirror => PanelKind::Mirror,
            ObjectKind::Custom => PanelKind::Custom,
        }
    }

    /// Light sources keep their size
    pub fn is_scalable(&self) -> bool {
        !matches!(self, ObjectKind::Light)
    }
}

/// Property panel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Light,
    Lens,
    Prism,
    Mirror,
    Custom,
}

impl PanelKind {
    pub const ALL: [PanelKind; 5] = [
        PanelKind::Light,
        PanelKind::Lens,
        PanelKind::Prism,
        PanelKind::Mirror,
        PanelKind::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Light => "Light",
            PanelKind::Lens => "Lens",
            PanelKind::Prism => "Prism",
            PanelKind::Mirror => "Mirror",
            PanelKind::Custom => "Custom",
        }
    }
}

/// Classify a capability set. First match wins:
///
/// 1. light-emitting → [`ObjectKind::Light`]
/// 2. glass → custom object, 3D lens, prism (no lens shape) or lens
/// 3. reflective → custom object or mirror
///
/// Returns None for entities without an optical role.
pub fn classify(capabilities: &Capabilities) -> Option<ObjectKind> {
    if capabilities.light.is_some() {
        return Some(ObjectKind::Light);
    }

    if let Some(glass) = &capabilities.glass {
        let kind = if capabilities.custom {
            ObjectKind::Custom
        } else if glass.lens_3d.is_some() {
            ObjectKind::Lens
        } else if capabilities.lens_shape.is_none() {
            ObjectKind::Prism
        } else {
            ObjectKind::Lens
        };
        return Some(kind);
    }

    if capabilities.reflective {
        return Some(if capabilities.custom {
            ObjectKind::Custom
        } else {
            ObjectKind::Mirror
        });
    }

    None
}
