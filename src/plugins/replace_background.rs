//! Replace background plugin: generative background replacement.

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::overlays::{lenient_string, QualifierValue};
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceBackgroundOptions {
    #[serde(default)]
    pub replace_background: Option<ReplaceBackground>,
}

/// `true`, a prompt, or `{ prompt, seed }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReplaceBackground {
    Enabled(bool),
    Prompt(String),
    Detailed(ReplaceBackgroundDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplaceBackgroundDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub prompt: Option<String>,
    /// Only numeric seeds are used
    #[serde(default)]
    pub seed: Option<QualifierValue>,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &ReplaceBackgroundOptions) {
    let properties = match &options.replace_background {
        Some(ReplaceBackground::Enabled(true)) => Vec::new(),
        Some(ReplaceBackground::Prompt(prompt)) if !prompt.is_empty() => {
            vec![format!("prompt_{}", prompt)]
        }
        Some(ReplaceBackground::Detailed(details)) => {
            let mut properties = Vec::new();
            if let Some(prompt) = details.prompt.as_deref().filter(|p| !p.is_empty()) {
                properties.push(format!("prompt_{}", prompt));
            }
            if let Some(seed @ QualifierValue::Number(_)) = &details.seed {
                properties.extend(seed.token().map(|seed| format!("seed_{}", seed)));
            }
            properties
        }
        _ => return,
    };

    if properties.is_empty() {
        asset.add_transformation("e_gen_background_replace");
    } else {
        asset.add_transformation(format!(
            "e_gen_background_replace:{}",
            properties.join(";")
        ));
    }
}
