//! Scene entities and their capability markers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{ObjectKind, classify};
use crate::types::{Aabb, Transform};

/// Unique identifier of an entity within a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Light-emitting capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightEmitter {
    /// Beam width
    pub width: f32,
    /// Wavelength in nanometres, ignored for white light
    pub wavelength: f32,
    /// Beam opacity, ignored for white light
    pub opacity: f32,
    pub white_light: bool,
}

impl Default for LightEmitter {
    fn default() -> Self {
        Self {
            width: 0.1,
            wavelength: 550.0,
            opacity: 1.0,
            white_light: true,
        }
    }
}

/// Curvature direction of a lens surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensForm {
    Concave,
    Convex,
}

impl LensForm {
    pub fn name(&self) -> &'static str {
        match self {
            LensForm::Concave => "concave",
            LensForm::Convex => "convex",
        }
    }

    /// Parse the lowercase document name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "concave" => Some(LensForm::Concave),
            "convex" => Some(LensForm::Convex),
            _ => None,
        }
    }
}

/// Refractive (glass) capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glass {
    pub refractive_index: f32,
    pub transmission: f32,
    /// Set when the glass body is a 3D lens mesh rather than a prism
    pub lens_3d: Option<LensForm>,
}

impl Default for Glass {
    fn default() -> Self {
        Self {
            refractive_index: 1.5,
            transmission: 1.0,
            lens_3d: None,
        }
    }
}

/// Lens-shape capability: a 2D lens profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensShape {
    pub form: LensForm,
    pub left_radius: f32,
    pub right_radius: f32,
    /// Aperture footprint width
    pub square_x: f32,
    /// Aperture footprint height
    pub square_y: f32,
}

impl LensShape {
    pub fn new(form: LensForm) -> Self {
        Self {
            form,
            left_radius: 2.0,
            right_radius: 2.0,
            square_x: 0.2,
            square_y: 1.0,
        }
    }
}

/// Capability markers attached to an entity.
///
/// Which markers are present is fixed when the entity is created; the values
/// inside them can be edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub light: Option<LightEmitter>,
    pub glass: Option<Glass>,
    pub lens_shape: Option<LensShape>,
    pub reflective: bool,
    /// User-built custom object
    pub custom: bool,
}

impl Capabilities {
    pub fn light(light: LightEmitter) -> Self {
        Self {
            light: Some(light),
            ..Default::default()
        }
    }

    pub fn lens(shape: LensShape, glass: Option<Glass>) -> Self {
        Self {
            glass,
            lens_shape: Some(shape),
            ..Default::default()
        }
    }

    pub fn prism(glass: Glass) -> Self {
        Self {
            glass: Some(glass),
            ..Default::default()
        }
    }

    pub fn mirror() -> Self {
        Self {
            reflective: true,
            ..Default::default()
        }
    }

    /// Mark as a custom object
    pub fn into_custom(mut self) -> Self {
        self.custom = true;
        self
    }
}

/// A placed object in the scene
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Parent entity, if this entity is part of a hierarchy
    pub parent: Option<EntityId>,
    pub transform: Transform,
    /// Local-space bounds used for picking
    pub bounds: Aabb,
    capabilities: Capabilities,
    kind: Option<ObjectKind>,
}

impl Entity {
    /// Create an entity. Its kind is resolved from the capabilities once, here.
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        let kind = classify(&capabilities);
        Self {
            id: EntityId::new(),
            name: name.into(),
            parent: None,
            transform: Transform::IDENTITY,
            bounds: Aabb::unit(),
            capabilities,
            kind,
        }
    }

    /// Create an entity without any optical capability (floor, backdrop, ...)
    pub fn background(name: impl Into<String>) -> Self {
        Self::new(name, Capabilities::default())
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn kind(&self) -> Option<ObjectKind> {
        self.kind
    }

    /// True for entities that no optical role applies to
    pub fn is_background(&self) -> bool {
        self.kind.is_none()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn light(&self) -> Option<&LightEmitter> {
        self.capabilities.light.as_ref()
    }

    pub fn light_mut(&mut self) -> Option<&mut LightEmitter> {
        self.capabilities.light.as_mut()
    }

    pub fn glass(&self) -> Option<&Glass> {
        self.capabilities.glass.as_ref()
    }

    pub fn glass_mut(&mut self) -> Option<&mut Glass> {
        self.capabilities.glass.as_mut()
    }

    pub fn lens_shape(&self) -> Option<&LensShape> {
        self.capabilities.lens_shape.as_ref()
    }

    pub fn lens_shape_mut(&mut self) -> Option<&mut LensShape> {
        self.capabilities.lens_shape.as_mut()
    }

    pub fn is_reflective(&self) -> bool {
        self.capabilities.reflective
    }

    pub fn is_custom(&self) -> bool {
        self.capabilities.custom
    }
}
