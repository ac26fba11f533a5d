//! Text layer specifiers.
//!
//! A text layer renders as
//!
//! ```text
//! text:<family>_<size>[_<weight>][_<style>][_<alignment>][_stroke]
//!     [_antialias_<v>][_hinting_<v>][_letter_spacing_<n>][_line_spacing_<n>]:<text>
//! ```
//!
//! followed by optional `co_<color>` and `bo_<border>` directives.

use std::borrow::Cow;

use super::encode_component;
use super::options::{QualifierValue, TextInput, TextOptions};
use crate::constants::{
    DEFAULT_TEXT_FONT_FAMILY, DEFAULT_TEXT_FONT_SIZE, DEFAULT_TEXT_FONT_WEIGHT,
};

/// Characters the text segment uses as delimiters; they are pre-escaped so
/// the delivery service sees them literally after its decode pass.
const SPECIAL_CHARACTERS: [(char, &str); 3] = [('/', "%2F"), ('.', "%2E"), (',', "%2C")];

/// A built text layer: the source part (after the `l_` prefix) and the
/// styling directives that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpec {
    /// `text:<font descriptor>:<escaped text>`
    pub source: String,
    /// `co_...`, `bo_...` in that order
    pub styles: Vec<String>,
}

/// Build the text layer for a bare string or styled object.
///
/// A bare string gets the default family, size and weight. For an object,
/// the family defaults on its own; size and weight default together only
/// when both are absent, and a size given without a weight emits no weight.
pub fn build_text_spec(input: &TextInput) -> TextSpec {
    let plain;
    let options = match input {
        TextInput::Plain(text) => {
            plain = TextOptions {
                text: Some(text.clone()),
                ..Default::default()
            };
            &plain
        }
        TextInput::Styled(options) => options,
    };

    let mut styles = Vec::new();
    if let Some(color) = non_empty(&options.color) {
        styles.push(format!("co_{}", normalize_color(color)));
    }
    if let Some(border) = non_empty(&options.border) {
        styles.push(format!("bo_{}", border));
    }

    TextSpec {
        source: format!(
            "text:{}:{}",
            font_descriptor(options),
            escape_text(options.text.as_deref().unwrap_or_default())
        ),
        styles,
    }
}

fn font_descriptor(options: &TextOptions) -> String {
    let family = non_empty(&options.font_family).unwrap_or(DEFAULT_TEXT_FONT_FAMILY);
    let weight = non_empty(&options.font_weight);

    let size = token(&options.font_size);
    let weight = match (&size, weight) {
        (None, None) => Some(DEFAULT_TEXT_FONT_WEIGHT),
        (_, weight) => weight,
    };
    let size = size.unwrap_or_else(|| Cow::Owned(DEFAULT_TEXT_FONT_SIZE.to_string()));

    let mut parts = vec![encode_component(family), size.into_owned()];
    parts.extend(weight.map(str::to_string));
    parts.extend(non_empty(&options.font_style).map(str::to_string));
    parts.extend(non_empty(&options.alignment).map(str::to_string));
    if options.stroke {
        parts.push("stroke".to_string());
    }
    if let Some(antialias) = non_empty(&options.antialias) {
        parts.push(format!("antialias_{}", antialias));
    }
    if let Some(hinting) = non_empty(&options.hinting) {
        parts.push(format!("hinting_{}", hinting));
    }
    if let Some(spacing) = token(&options.letter_spacing) {
        parts.push(format!("letter_spacing_{}", spacing));
    }
    if let Some(spacing) = token(&options.line_spacing) {
        parts.push(format!("line_spacing_{}", spacing));
    }

    parts.join("_")
}

/// Escape the text payload: `/`, `.` and `,` are replaced by their percent
/// escapes, then the whole string is component-encoded, so `/` ends up as
/// `%252F` and a space as `%20`. `! ' ( ) * - _ ~` stay literal.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match SPECIAL_CHARACTERS.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => escaped.push_str(replacement),
            None => escaped.push(c),
        }
    }
    encode_component(&escaped)
}

/// `#rrggbb` (or `#rgb`, `#rgba`, `#rrggbbaa`) becomes `rgb:rrggbb`; any other
/// color token is returned unchanged.
pub fn normalize_color(color: &str) -> Cow<'_, str> {
    match color.strip_prefix('#') {
        Some(hex)
            if matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            Cow::Owned(format!("rgb:{}", hex))
        }
        _ => Cow::Borrowed(color),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn token(value: &Option<QualifierValue>) -> Option<Cow<'_, str>> {
    value.as_ref().and_then(|v| v.token())
}
