//! Fill background plugin: generative padding out to a target aspect ratio.
//!
//! ```text
//! b_gen_fill[:prompt_<prompt>],ar_<ratio>,c_<crop>[,g_<gravity>]
//! ```
//!
//! The ratio comes from `aspectRatio`, or from numeric `width` and `height`.

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::warn;

use super::overlays::lenient_string;
use crate::asset::Transformable;
use crate::constants::FILL_BACKGROUND_CROP;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillBackgroundOptions {
    #[serde(default)]
    pub fill_background: Option<FillBackground>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FillBackground {
    Enabled(bool),
    Detailed(FillBackgroundDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FillBackgroundDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crop: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gravity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub prompt: Option<String>,
}

pub fn apply<T: Transformable>(
    asset: &mut T,
    options: &FillBackgroundOptions,
    aspect_ratio: Option<&str>,
) {
    let details = match &options.fill_background {
        Some(FillBackground::Enabled(true)) => None,
        Some(FillBackground::Detailed(details)) => Some(details),
        _ => return,
    };

    let aspect_ratio = match aspect_ratio {
        Some(ratio) => ratio,
        None => {
            warn!("Could not determine an aspect ratio for the background fill; set aspectRatio or numeric width and height");
            return;
        }
    };

    let fill = match details.and_then(|d| non_empty(&d.prompt)) {
        Some(prompt) => format!("b_gen_fill:prompt_{}", prompt),
        None => "b_gen_fill".to_string(),
    };
    let crop = details
        .and_then(|d| non_empty(&d.crop))
        .unwrap_or(FILL_BACKGROUND_CROP);

    let mut properties = vec![fill, format!("ar_{}", aspect_ratio), format!("c_{}", crop)];
    if let Some(gravity) = details.and_then(|d| non_empty(&d.gravity)) {
        properties.push(format!("g_{}", gravity));
    }

    asset.add_transformation(properties.join(","));
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
