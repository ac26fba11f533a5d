//! Overlay plugin: image and text layers composited onto the base asset.
//!
//! Each layer becomes one transformation component:
//!
//! ```text
//! l_<source>[,<pre-commit directives>]/fl_layer_apply,fl_no_overflow[,<applied directives>]
//! ```
//!
//! Pre-commit directives, in order: text styling (`co_`, `bo_`), descriptor
//! qualifiers and position, `effects`, `flags`. Applied directives, in
//! order: `appliedEffects`, `appliedFlags`.
//!
//! # Example
//!
//! ```
//! use url_loader::asset::{ImageAsset, Transformable};
//! use url_loader::config::CloudConfig;
//! use url_loader::plugins::overlays::{self, Effect, Layer, OverlayOptions};
//!
//! let mut image = ImageAsset::new("sample", &CloudConfig::new("demo"));
//! let options = OverlayOptions {
//!     overlays: Some(vec![Layer::from_public_id("images/logo")
//!         .with_effect(Effect::new().with("width", 100))]),
//!     text: None,
//! };
//! overlays::apply(&mut image, &options);
//!
//! assert_eq!(
//!     image.transformations(),
//!     ["l_images:logo,w_100/fl_layer_apply,fl_no_overflow"]
//! );
//! ```

pub mod options;
pub mod qualifiers;
pub mod text;

use base64::{engine::general_purpose::URL_SAFE, Engine};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{trace, warn};

use crate::asset::Transformable;
use crate::constants::{LAYER_APPLY, OVERLAY_PREFIX, UNDERLAY_PREFIX};

pub use options::{
    lenient_flag, lenient_string, Effect, Layer, OverlayOptions, Position, QualifierValue,
    TextInput, TextOptions,
};
pub use text::{build_text_spec, escape_text, normalize_color, TextSpec};

/// Which side of the base asset a layer is composited on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Overlay,
    Underlay,
}

impl LayerKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Overlay => OVERLAY_PREFIX,
            Self::Underlay => UNDERLAY_PREFIX,
        }
    }

    /// Text sources only exist for overlays
    fn supports_text(&self) -> bool {
        matches!(self, Self::Overlay)
    }
}

/// Apply every overlay in `options` to `asset`, in order.
///
/// Layers without a usable source are skipped.
pub fn apply<T: Transformable>(asset: &mut T, options: &OverlayOptions) {
    for layer in options.layers().iter() {
        apply_layer(asset, LayerKind::Overlay, layer);
    }
}

/// Build one layer and add it to `asset`. Returns false if it was skipped.
pub fn apply_layer<T: Transformable>(asset: &mut T, kind: LayerKind, layer: &Layer) -> bool {
    match build_layer(kind, layer) {
        Some(transformation) => {
            trace!(transformation = %transformation, "Applying layer");
            asset.add_transformation(transformation);
            true
        }
        None => {
            warn!(
                kind = ?kind,
                "Layer is missing a public ID, URL or text; skipping"
            );
            false
        }
    }
}

/// The transformation component for `layer`, or `None` without a source
pub fn build_layer(kind: LayerKind, layer: &Layer) -> Option<String> {
    let mut primary = Vec::new();

    let text = layer.text.as_ref().filter(|_| kind.supports_text());
    let source = if let Some(text) = text {
        let spec = build_text_spec(text);
        primary.extend(spec.styles);
        spec.source
    } else if let Some(public_id) = non_empty(&layer.public_id) {
        public_id.replace('/', ":")
    } else if let Some(url) = non_empty(&layer.url) {
        format!("fetch:{}", encode_fetch_url(url))
    } else {
        return None;
    };

    primary.extend(qualifiers::render_effect(
        &layer.qualifiers,
        qualifiers::primary,
    ));
    if let Some(position) = &layer.position {
        primary.extend(qualifiers::render_effect(
            &position.to_effect(),
            qualifiers::primary,
        ));
    }
    for effect in &layer.effects {
        primary.extend(qualifiers::render_effect(
            effect,
            qualifiers::primary_or_effect,
        ));
    }
    primary.extend(flag_directives(&layer.flags));

    let mut applied = Vec::new();
    for effect in &layer.applied_effects {
        applied.extend(qualifiers::render_effect(
            effect,
            qualifiers::primary_or_effect,
        ));
    }
    applied.extend(flag_directives(&layer.applied_flags));

    let mut transformation = format!("{}_{}", kind.prefix(), source);
    if !primary.is_empty() {
        transformation.push(',');
        transformation.push_str(&primary.join(","));
    }
    transformation.push('/');
    transformation.push_str(LAYER_APPLY);
    if !applied.is_empty() {
        transformation.push(',');
        transformation.push_str(&applied.join(","));
    }

    Some(transformation)
}

/// Bytes left as-is by URI component encoding: alphanumerics and
/// `- _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URI component encoding of `value` (UTF-8, uppercase hex escapes)
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Remote sources are referenced as URL-safe base64 with padding kept; the
/// padding is component-encoded (`=` -> `%3D`).
pub fn encode_fetch_url(url: &str) -> String {
    encode_component(&URL_SAFE.encode(url))
}

fn flag_directives(flags: &[String]) -> impl Iterator<Item = String> + '_ {
    flags
        .iter()
        .filter(|flag| !flag.is_empty())
        .map(|flag| format!("fl_{}", flag))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
