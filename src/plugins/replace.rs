//! Replace plugin: generative replacement of one object with another.
//!
//! ```text
//! e_gen_replace:from_<from>;to_<to>[;preserve-geometry_true]
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::warn;

use super::overlays::{lenient_flag, lenient_string, QualifierValue};
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplaceOptions {
    #[serde(default)]
    pub replace: Option<Replace>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Replace {
    /// `[from, to]` or `[from, to, preserveGeometry]`
    List(Vec<QualifierValue>),
    Detailed(ReplaceDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub preserve_geometry: bool,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &ReplaceOptions) {
    let (from, to, preserve_geometry) = match &options.replace {
        Some(Replace::List(items)) => (
            items.first().and_then(QualifierValue::as_text),
            items.get(1).and_then(QualifierValue::as_text),
            items.get(2).map_or(false, QualifierValue::is_true),
        ),
        Some(Replace::Detailed(details)) => (
            details.from.as_deref(),
            details.to.as_deref(),
            details.preserve_geometry,
        ),
        Some(Replace::Unsupported(_)) | None => return,
    };

    let (from, to) = match (from, to) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
        _ => {
            warn!("Replace needs both a `from` and a `to` prompt; skipping");
            return;
        }
    };

    let mut transformation = format!("e_gen_replace:from_{};to_{}", from, to);
    if preserve_geometry {
        transformation.push_str(";preserve-geometry_true");
    }
    asset.add_transformation(transformation);
}
