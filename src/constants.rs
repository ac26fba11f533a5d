// Constants module - centralized default values for URL construction
//
// This module defines the default values used when building delivery URLs
// and text layers. Keeping them here avoids magic strings in the plugins.

// =============================================================================
// Delivery defaults
// =============================================================================

/// Shared delivery host used when no private CDN or custom distribution is set
pub const DEFAULT_DELIVERY_HOST: &str = "res.cloudinary.com";

/// Default asset type path segment
pub const DEFAULT_ASSET_TYPE: &str = "image";

/// Default delivery type path segment
pub const DEFAULT_DELIVERY_TYPE: &str = "upload";

// =============================================================================
// Layer defaults
// =============================================================================

/// Qualifier prefix for overlay layers
pub const OVERLAY_PREFIX: &str = "l";

/// Qualifier prefix for underlay layers
pub const UNDERLAY_PREFIX: &str = "u";

/// Tokens closing a layer's own directives; everything after them applies to
/// the composited result
pub const LAYER_APPLY: &str = "fl_layer_apply,fl_no_overflow";

/// Directives appended to the `underlay` shorthand so the layer fills the base
pub const UNDERLAY_FILL: &str = "c_fill,w_1.0,h_1.0,fl_relative";

// =============================================================================
// Generative plugin defaults
// =============================================================================

/// Crop mode for a generative background fill when none is given
pub const FILL_BACKGROUND_CROP: &str = "pad";

/// Delivery format forced by zoompan so the result is animated
pub const ZOOMPAN_FORMAT: &str = "auto:animated";

// =============================================================================
// Text defaults
// =============================================================================

/// Default text layer font family
pub const DEFAULT_TEXT_FONT_FAMILY: &str = "Times New Roman";

/// Default text layer font size
pub const DEFAULT_TEXT_FONT_SIZE: u32 = 200;

/// Default text layer font weight
pub const DEFAULT_TEXT_FONT_WEIGHT: &str = "bold";
