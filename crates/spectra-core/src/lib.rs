//! Spectra Core
//!
//! Editing-independent data for the optics sandbox:
//! - Entity: placed object with capability markers (light, glass, lens shape, reflective)
//! - Classification: capability markers to optical kind and property panel
//! - Scene: the live entity container
//! - SceneDocument: versioned flat records written to and read from disk
//! - Geometry: pointer projection, angles and scale factors

pub mod classify;
pub mod document;
pub mod entity;
pub mod factory;
pub mod geometry;
pub mod scene;
pub mod types;

pub use classify::*;
pub use document::*;
pub use entity::*;
pub use factory::*;
pub use scene::*;
pub use types::*;
