//! Default image plugin: the asset delivered in place of a missing one.

use serde::Deserialize;
use tracing::warn;

use super::overlays::lenient_string;
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultImageOptions {
    /// Public ID with its format, e.g. `images/placeholder.jpg`
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_image: Option<String>,
}

/// Add `d_<public id>`, with folder separators written as `:`
pub fn apply<T: Transformable>(asset: &mut T, options: &DefaultImageOptions) {
    let default_image = match options.default_image.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return,
    };

    if !has_format(default_image) {
        warn!(
            default_image = %default_image,
            "Default image may be missing a format; it must be given with the public ID (e.g. placeholder.jpg)"
        );
    }

    asset.add_transformation(format!("d_{}", default_image.replace('/', ":")));
}

fn has_format(public_id: &str) -> bool {
    let name = public_id.rsplit('/').next().unwrap_or(public_id);
    matches!(name.rsplit_once('.'), Some((stem, ext)) if !stem.is_empty() && !ext.is_empty())
}
