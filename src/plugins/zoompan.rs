//! Zoompan plugin: animated zoom and pan across a still image.
//!
//! Any enabled zoompan switches the delivery format to an animated one.

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::overlays::{lenient_string, QualifierValue};
use crate::asset::Transformable;
use crate::constants::ZOOMPAN_FORMAT;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZoompanOptions {
    #[serde(default)]
    pub zoompan: Option<Zoompan>,
}

/// `true`, `"loop"`, raw zoompan options, or `{ loop, options }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Zoompan {
    Enabled(bool),
    Options(String),
    Detailed(ZoompanDetails),
    Unsupported(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZoompanDetails {
    /// `true` loops forever; a number or string is the loop argument
    #[serde(default, rename = "loop")]
    pub looping: Option<QualifierValue>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub options: Option<String>,
}

pub fn apply<T: Transformable>(asset: &mut T, options: &ZoompanOptions) {
    match &options.zoompan {
        Some(Zoompan::Enabled(true)) => asset.add_transformation("e_zoompan"),
        Some(Zoompan::Options(preset)) if preset == "loop" => {
            asset.add_transformation("e_zoompan");
            asset.add_transformation("e_loop");
        }
        Some(Zoompan::Options(options)) if !options.is_empty() => {
            asset.add_transformation(format!("e_zoompan:{}", options));
        }
        Some(Zoompan::Detailed(details)) => {
            match details.options.as_deref().filter(|options| !options.is_empty()) {
                Some(options) => asset.add_transformation(format!("e_zoompan:{}", options)),
                None => asset.add_transformation("e_zoompan"),
            }
            match &details.looping {
                Some(QualifierValue::Flag(true)) => asset.add_transformation("e_loop"),
                Some(value @ (QualifierValue::Number(_) | QualifierValue::Text(_))) => {
                    if let Some(value) = value.token() {
                        asset.add_transformation(format!("e_loop:{}", value));
                    }
                }
                _ => {}
            }
        }
        _ => return,
    }

    asset.set_format(ZOOMPAN_FORMAT);
}
