//! Recolor plugin: generative recoloring of prompt-matched objects.
//!
//! ```text
//! e_gen_recolor:prompt_<prompt>[;to-color_<color>][;multiple_true]
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::overlays::{lenient_flag, lenient_string};
use super::prompt::Prompt;
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecolorOptions {
    #[serde(default)]
    pub recolor: Option<Recolor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Recolor {
    /// `[prompt, color]`, where the prompt may itself be a list
    List(Vec<Prompt>),
    Detailed(RecolorDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecolorDetails {
    #[serde(default)]
    pub prompt: Option<Prompt>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub multiple: bool,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &RecolorOptions) {
    let (prompt, to_color, multiple) = match &options.recolor {
        Some(Recolor::List(items)) => {
            let to_color = match items.get(1) {
                Some(Prompt::One(color)) => Some(color.clone()),
                _ => None,
            };
            (items.first().and_then(Prompt::format), to_color, false)
        }
        Some(Recolor::Detailed(details)) => (
            details.prompt.as_ref().and_then(Prompt::format),
            details.to.clone(),
            details.multiple,
        ),
        Some(Recolor::Unsupported(_)) | None => return,
    };

    let mut properties = Vec::new();
    properties.extend(prompt.map(|prompt| format!("prompt_{}", prompt)));
    properties.extend(
        to_color
            .filter(|color| !color.is_empty())
            .map(|color| format!("to-color_{}", color)),
    );
    if multiple {
        properties.push("multiple_true".to_string());
    }

    if !properties.is_empty() {
        asset.add_transformation(format!("e_gen_recolor:{}", properties.join(";")));
    }
}
