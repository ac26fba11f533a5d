//! Image option record.
//!
//! Every plugin contributes one field group; the groups are flattened into
//! a single record so callers send one flat object:
//!
//! ```json
//! { "src": "sample", "overlays": [{ "publicId": "logo" }], "underlay": "bg", "restore": true }
//! ```

use serde::Deserialize;

use crate::error::LoaderError;
use crate::plugins::default_image::DefaultImageOptions;
use crate::plugins::enhance::EnhanceOptions;
use crate::plugins::extract::ExtractOptions;
use crate::plugins::fill_background::FillBackgroundOptions;
use crate::plugins::overlays::{OverlayOptions, QualifierValue};
use crate::plugins::recolor::RecolorOptions;
use crate::plugins::remove::RemoveOptions;
use crate::plugins::replace::ReplaceOptions;
use crate::plugins::replace_background::ReplaceBackgroundOptions;
use crate::plugins::restore::RestoreOptions;
use crate::plugins::underlays::UnderlayOptions;
use crate::plugins::zoompan::ZoompanOptions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    /// Public ID of the base asset
    #[serde(default)]
    pub src: String,

    /// Target dimensions; numbers or numeric strings
    #[serde(default)]
    pub width: Option<QualifierValue>,
    #[serde(default)]
    pub height: Option<QualifierValue>,
    /// e.g. `16:9`; takes precedence over `width`/`height`
    #[serde(default)]
    pub aspect_ratio: Option<QualifierValue>,

    #[serde(flatten)]
    pub default_image: DefaultImageOptions,

    #[serde(flatten)]
    pub enhance: EnhanceOptions,

    #[serde(flatten)]
    pub extract: ExtractOptions,

    #[serde(flatten)]
    pub fill_background: FillBackgroundOptions,

    #[serde(flatten)]
    pub overlays: OverlayOptions,

    #[serde(flatten)]
    pub recolor: RecolorOptions,

    #[serde(flatten)]
    pub remove: RemoveOptions,

    #[serde(flatten)]
    pub replace: ReplaceOptions,

    #[serde(flatten)]
    pub replace_background: ReplaceBackgroundOptions,

    #[serde(flatten)]
    pub restore: RestoreOptions,

    #[serde(flatten)]
    pub underlays: UnderlayOptions,

    #[serde(flatten)]
    pub zoompan: ZoompanOptions,
}

impl ImageOptions {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    /// Parse loosely-typed JSON input; unknown keys are ignored
    pub fn from_json(json: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `aspectRatio` as given, else `<width>:<height>` when both are numeric
    pub fn aspect_ratio(&self) -> Option<String> {
        if let Some(ratio) = self.aspect_ratio.as_ref().and_then(QualifierValue::token) {
            return Some(ratio.into_owned());
        }
        let width = dimension(&self.width)?;
        let height = dimension(&self.height)?;
        Some(format!("{}:{}", width, height))
    }
}

fn dimension(value: &Option<QualifierValue>) -> Option<String> {
    match value.as_ref()? {
        number @ QualifierValue::Number(_) => number.token().map(|n| n.into_owned()),
        QualifierValue::Text(text) => text.parse::<u64>().ok().map(|n| n.to_string()),
        _ => None,
    }
}
