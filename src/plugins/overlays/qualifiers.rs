//! Option key to URL qualifier tables.
//!
//! Two tables:
//! 1. Primary qualifiers render as `<symbol>_<value>` (`width` -> `w_100`)
//! 2. Effects render as `e_<name>:<value>`, or `e_<name>` for `true`

use std::borrow::Cow;

use tracing::debug;

use super::options::{Effect, QualifierValue};
use super::text::normalize_color;

/// How an option key is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// `<symbol>_<value>`; `color` values get `#` -> `rgb:` normalization
    Primary { symbol: &'static str, color: bool },
    /// `e_<name>:<value>` or `e_<name>`
    Effect { name: &'static str },
}

impl Qualifier {
    const fn primary(symbol: &'static str) -> Self {
        Self::Primary {
            symbol,
            color: false,
        }
    }

    const fn color(symbol: &'static str) -> Self {
        Self::Primary {
            symbol,
            color: true,
        }
    }

    const fn effect(name: &'static str) -> Self {
        Self::Effect { name }
    }

    /// Directive for `value`, or `None` if the value emits nothing
    pub fn render(&self, value: &QualifierValue) -> Option<String> {
        let value = value.render()?;

        match *self {
            Self::Primary { symbol, .. } if value.is_empty() => Some(symbol.to_string()),
            Self::Primary { symbol, color } => {
                let value = if color {
                    normalize_color(&value)
                } else {
                    Cow::Borrowed(value.as_ref())
                };
                Some(format!("{}_{}", symbol, value))
            }
            Self::Effect { name } if value.is_empty() => Some(format!("e_{}", name)),
            Self::Effect { name } => Some(format!("e_{}:{}", name, value)),
        }
    }
}

/// Qualifiers accepted directly on a layer descriptor and inside effects
pub fn primary(key: &str) -> Option<Qualifier> {
    let qualifier = match key {
        "angle" => Qualifier::primary("a"),
        "aspectRatio" => Qualifier::primary("ar"),
        "background" => Qualifier::color("b"),
        "border" => Qualifier::primary("bo"),
        "color" => Qualifier::color("co"),
        "crop" => Qualifier::primary("c"),
        "density" => Qualifier::primary("dn"),
        "dpr" => Qualifier::primary("dpr"),
        "gravity" => Qualifier::primary("g"),
        "height" => Qualifier::primary("h"),
        "opacity" => Qualifier::primary("o"),
        "quality" => Qualifier::primary("q"),
        "radius" => Qualifier::primary("r"),
        "width" => Qualifier::primary("w"),
        "x" => Qualifier::primary("x"),
        "y" => Qualifier::primary("y"),
        "zoom" => Qualifier::primary("z"),
        _ => return None,
    };
    Some(qualifier)
}

/// Named effects (`e_` prefix)
pub fn effect(key: &str) -> Option<Qualifier> {
    let qualifier = match key {
        "art" => Qualifier::effect("art"),
        "assistColorblind" => Qualifier::effect("assist_colorblind"),
        "autoBrightness" => Qualifier::effect("auto_brightness"),
        "autoColor" => Qualifier::effect("auto_color"),
        "autoContrast" => Qualifier::effect("auto_contrast"),
        "blackwhite" => Qualifier::effect("blackwhite"),
        "blur" => Qualifier::effect("blur"),
        "blurFaces" => Qualifier::effect("blur_faces"),
        "blurRegion" => Qualifier::effect("blur_region"),
        "brightness" => Qualifier::effect("brightness"),
        "cartoonify" => Qualifier::effect("cartoonify"),
        "colorize" => Qualifier::effect("colorize"),
        "contrast" => Qualifier::effect("contrast"),
        "distort" => Qualifier::effect("distort"),
        "fillLight" => Qualifier::effect("fill_light"),
        "gamma" => Qualifier::effect("gamma"),
        "gradientFade" => Qualifier::effect("gradient_fade"),
        "grayscale" => Qualifier::effect("grayscale"),
        "hue" => Qualifier::effect("hue"),
        "improve" => Qualifier::effect("improve"),
        "multiply" => Qualifier::effect("multiply"),
        "negate" => Qualifier::effect("negate"),
        "oilPaint" => Qualifier::effect("oil_paint"),
        "outline" => Qualifier::effect("outline"),
        "overlay" => Qualifier::effect("overlay"),
        "pixelate" => Qualifier::effect("pixelate"),
        "pixelateFaces" => Qualifier::effect("pixelate_faces"),
        "pixelateRegion" => Qualifier::effect("pixelate_region"),
        "redeye" => Qualifier::effect("redeye"),
        "replaceColor" => Qualifier::effect("replace_color"),
        "saturation" => Qualifier::effect("saturation"),
        "screen" => Qualifier::effect("screen"),
        "sepia" => Qualifier::effect("sepia"),
        "shadow" => Qualifier::effect("shadow"),
        "sharpen" => Qualifier::effect("sharpen"),
        "shear" => Qualifier::effect("shear"),
        "simulateColorblind" => Qualifier::effect("simulate_colorblind"),
        "tint" => Qualifier::effect("tint"),
        "trim" => Qualifier::effect("trim"),
        "unsharpMask" => Qualifier::effect("unsharp_mask"),
        "vectorize" => Qualifier::effect("vectorize"),
        "vibrance" => Qualifier::effect("vibrance"),
        "vignette" => Qualifier::effect("vignette"),
        _ => return None,
    };
    Some(qualifier)
}

/// Lookup used for `effects` / `appliedEffects` entries
pub fn primary_or_effect(key: &str) -> Option<Qualifier> {
    primary(key).or_else(|| effect(key))
}

/// Render every entry of `effect` that `lookup` knows, in input order.
/// Unknown keys are dropped.
pub fn render_effect(effect: &Effect, lookup: fn(&str) -> Option<Qualifier>) -> Vec<String> {
    effect
        .entries()
        .iter()
        .filter_map(|(key, value)| match lookup(key) {
            Some(qualifier) => qualifier.render(value),
            None => {
                debug!(key = %key, "Dropping unsupported layer option");
                None
            }
        })
        .collect()
}
