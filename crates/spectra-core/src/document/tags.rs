//! Record kind tags
//!
//! The `type` strings are the ones written by every version of the editor and
//! must not change.

use serde::{Deserialize, Deserializer, Serializer};
use serde::Serialize;

use crate::entity::LensForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightTag {
    #[default]
    #[serde(rename = "light")]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LenseTag {
    #[serde(rename = "ConcaveShape")]
    Concave,
    #[serde(rename = "ConvexShape")]
    Convex,
}

impl From<LensForm> for LenseTag {
    fn from(form: LensForm) -> Self {
        match form {
            LensForm::Concave => LenseTag::Concave,
            LensForm::Convex => LenseTag::Convex,
        }
    }
}

impl From<LenseTag> for LensForm {
    fn from(tag: LenseTag) -> Self {
        match tag {
            LenseTag::Concave => LensForm::Concave,
            LenseTag::Convex => LensForm::Convex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrismTag {
    #[default]
    Prism,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MirrorTag {
    #[default]
    Mirror,
}

/// `typeOfLense3D`: `"concave"`, `"convex"`, or `""` when the prism is not a 3D lens.
///
/// Reading ignores case and surrounding whitespace. Any other non-empty name
/// spawns a convex body, as saved scenes always have.
pub(crate) mod lens_3d_kind {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<LensForm>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|form| form.name()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<LensForm>, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(parse(&name))
    }

    pub(crate) fn parse(name: &str) -> Option<LensForm> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let form = LensForm::from_name(&name.to_ascii_lowercase());
        if form.is_none() {
            tracing::warn!("Unknown 3D lens kind {:?}, reading it as convex", name);
        }
        Some(form.unwrap_or(LensForm::Convex))
    }
}
