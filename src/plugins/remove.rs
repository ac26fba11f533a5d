//! Remove plugin: generative removal of objects, found either by prompt or
//! by explicit regions.
//!
//! ```text
//! e_gen_remove:prompt_<prompt>[;multiple_true][;remove-shadow_true]
//! e_gen_remove:region_(x_<x>;y_<y>;w_<w>;h_<h>)
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::overlays::{lenient_flag, QualifierValue};
use super::prompt::Prompt;
use crate::asset::Transformable;
use crate::error::LoaderError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoveOptions {
    #[serde(default)]
    pub remove: Option<Remove>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Remove {
    Prompt(Prompt),
    Detailed(RemoveDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDetails {
    #[serde(default)]
    pub prompt: Option<Prompt>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub multiple: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub remove_shadow: bool,
}

/// `[x, y, w, h]` or a list of them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Region {
    Many(Vec<Vec<QualifierValue>>),
    One(Vec<QualifierValue>),
}

impl Region {
    /// `(x_1;y_2;w_3;h_4)`, or `((...);(...))` for a list. Regions without
    /// four usable values are skipped.
    pub fn format(&self) -> Option<String> {
        match self {
            Self::One(region) => format_region(region),
            Self::Many(regions) => {
                let regions: Vec<String> =
                    regions.iter().filter_map(|r| format_region(r)).collect();
                if regions.is_empty() {
                    None
                } else {
                    Some(format!("({})", regions.join(";")))
                }
            }
        }
    }
}

fn format_region(region: &[QualifierValue]) -> Option<String> {
    let values = region
        .iter()
        .take(4)
        .map(QualifierValue::token)
        .collect::<Option<Vec<_>>>()?;
    match values.as_slice() {
        [x, y, w, h] => Some(format!("(x_{};y_{};w_{};h_{})", x, y, w, h)),
        _ => None,
    }
}

/// Add the removal effect. A prompt and a region together are rejected.
pub fn apply<T: Transformable>(asset: &mut T, options: &RemoveOptions) -> Result<(), LoaderError> {
    let mut properties = Vec::new();

    match &options.remove {
        Some(Remove::Prompt(prompt)) => {
            properties.extend(prompt.format().map(|prompt| format!("prompt_{}", prompt)));
        }
        Some(Remove::Detailed(details)) => {
            if details.prompt.is_some() && details.region.is_some() {
                return Err(LoaderError::invalid_plugin_options(
                    "remove",
                    "a prompt and a region can not be used together",
                ));
            }
            if let Some(prompt) = details.prompt.as_ref().and_then(Prompt::format) {
                properties.push(format!("prompt_{}", prompt));
            }
            if let Some(region) = details.region.as_ref().and_then(Region::format) {
                properties.push(format!("region_{}", region));
            }
            if details.multiple {
                properties.push("multiple_true".to_string());
            }
            if details.remove_shadow {
                properties.push("remove-shadow_true".to_string());
            }
        }
        Some(Remove::Unsupported(_)) | None => {}
    }

    if !properties.is_empty() {
        asset.add_transformation(format!("e_gen_remove:{}", properties.join(";")));
    }
    Ok(())
}
