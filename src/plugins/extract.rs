//! Extract plugin: keep only the parts of the image matching a prompt.
//!
//! ```text
//! e_extract:prompt_<prompt>[;invert_true][;mode_<mode>][;multiple_true]
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::overlays::{lenient_flag, lenient_string};
use super::prompt::Prompt;
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtractOptions {
    #[serde(default)]
    pub extract: Option<Extract>,
}

/// `"dog"`, `["dog", "cat"]` or a detailed object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Extract {
    Prompt(Prompt),
    Detailed(ExtractDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtractDetails {
    #[serde(default)]
    pub prompt: Option<Prompt>,
    /// Extract everything except the prompt match
    #[serde(default, deserialize_with = "lenient_flag")]
    pub invert: bool,
    /// `content` or `mask`
    #[serde(default, deserialize_with = "lenient_string")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub multiple: bool,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &ExtractOptions) {
    let mut properties = Vec::new();

    match &options.extract {
        Some(Extract::Prompt(prompt)) => {
            properties.extend(prompt.format().map(|prompt| format!("prompt_{}", prompt)));
        }
        Some(Extract::Detailed(details)) => {
            if let Some(prompt) = details.prompt.as_ref().and_then(Prompt::format) {
                properties.push(format!("prompt_{}", prompt));
            }
            if details.invert {
                properties.push("invert_true".to_string());
            }
            if let Some(mode) = details.mode.as_deref().filter(|mode| !mode.is_empty()) {
                properties.push(format!("mode_{}", mode));
            }
            if details.multiple {
                properties.push("multiple_true".to_string());
            }
        }
        Some(Extract::Unsupported(_)) | None => {}
    }

    if !properties.is_empty() {
        asset.add_transformation(format!("e_extract:{}", properties.join(";")));
    }
}
