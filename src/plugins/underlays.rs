//! Underlay plugin: image layers placed beneath the base asset.
//!
//! Underlays share the overlay layer builder with a `u_` prefix. Text is not
//! a valid underlay source. The `underlay` shorthand stretches a single
//! public ID over the whole base:
//!
//! ```text
//! u_<id>,c_fill,w_1.0,h_1.0,fl_relative/fl_layer_apply,fl_no_overflow
//! ```

use serde::Deserialize;

use super::overlays::{apply_layer, Layer, LayerKind};
use crate::asset::Transformable;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderlayOptions {
    #[serde(default)]
    pub underlays: Option<Vec<Layer>>,
    /// Public ID of a single full-size underlay
    #[serde(default)]
    pub underlay: Option<String>,
}

impl UnderlayOptions {
    /// Layers to apply: the shorthand first, then the explicit list
    pub fn layers(&self) -> Vec<Layer> {
        let shorthand = self
            .underlay
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(fill_layer);

        shorthand
            .into_iter()
            .chain(self.underlays.iter().flatten().cloned())
            .collect()
    }
}

fn fill_layer(public_id: &str) -> Layer {
    Layer::from_public_id(public_id)
        .with_qualifier("crop", "fill")
        .with_qualifier("width", "1.0")
        .with_qualifier("height", "1.0")
        .with_flag("relative")
}

/// Apply every underlay in `options` to `asset`, in order
pub fn apply<T: Transformable>(asset: &mut T, options: &UnderlayOptions) {
    for layer in options.layers() {
        apply_layer(asset, LayerKind::Underlay, &layer);
    }
}
