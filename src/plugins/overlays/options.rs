//! Overlay option types.
//!
//! These mirror the loosely-typed option objects callers send (usually JSON
//! with camelCase keys). Unknown keys are ignored at every level; effect
//! entries keep their keys in input order because emission order follows it.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single qualifier value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum QualifierValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    /// null, arrays and objects: accepted and never emitted
    Unsupported,
}

impl QualifierValue {
    /// Rendered value, or `None` when the value emits nothing.
    ///
    /// `true` (and the string `"true"`) render as an empty value, meaning
    /// "emit the bare qualifier".
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Flag(true) => Some(Cow::Borrowed("")),
            Self::Text(s) if s == "true" => Some(Cow::Borrowed("")),
            Self::Text(s) if !s.is_empty() => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(render_number(n))),
            Self::Flag(false) | Self::Text(_) | Self::Unsupported => None,
        }
    }

    /// Rendered value when it is a real token (not a bare `true`)
    pub fn token(&self) -> Option<Cow<'_, str>> {
        self.render().filter(|value| !value.is_empty())
    }

    /// `true` or `"true"`
    pub fn is_true(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(s) => s == "true",
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Integral floats drop their fractional part (`1.0` -> `1`).
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Any value is accepted; only a string is kept.
pub fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<QualifierValue>::deserialize(deserializer)? {
        Some(QualifierValue::Text(s)) => Some(s),
        _ => None,
    })
}

/// Any value is accepted; `true` and `"true"` count as set.
pub fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<QualifierValue>::deserialize(deserializer)?.map_or(false, |v| v.is_true()))
}

impl From<bool> for QualifierValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for QualifierValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QualifierValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for QualifierValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or(Self::Unsupported)
    }
}

macro_rules! qualifier_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QualifierValue {
                fn from(value: $ty) -> Self {
                    Self::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

qualifier_value_from_int!(i32, i64, u32, u64);

impl<'de> Deserialize<'de> for QualifierValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QualifierValueVisitor)
    }
}

struct QualifierValueVisitor;

impl<'de> Visitor<'de> for QualifierValueVisitor {
    type Value = QualifierValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a qualifier value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(QualifierValue::Flag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(QualifierValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(QualifierValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(QualifierValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(QualifierValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(QualifierValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QualifierValue::Unsupported)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(QualifierValue::Unsupported)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(QualifierValue::Unsupported)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(QualifierValue::Unsupported)
    }
}

/// Ordered key/value directives, e.g. `{ "width": 100, "height": 200 }`.
///
/// Keys are resolved against the qualifier tables only when rendered, so
/// unknown keys survive parsing and are dropped at emission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    entries: Vec<(String, QualifierValue)>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directive; a repeated key is emitted twice
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QualifierValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn entries(&self) -> &[(String, QualifierValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Effect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EffectVisitor)
    }
}

struct EffectVisitor;

impl<'de> Visitor<'de> for EffectVisitor {
    type Value = Effect;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of effect qualifiers")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Effect::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, QualifierValue>()? {
            entries.push((key, value));
        }
        Ok(Effect { entries })
    }
}

/// Placement of a layer on the base asset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub gravity: Option<String>,
    #[serde(default)]
    pub x: Option<QualifierValue>,
    #[serde(default)]
    pub y: Option<QualifierValue>,
    #[serde(default)]
    pub angle: Option<QualifierValue>,
}

impl Position {
    /// Position directives as an ordered effect (gravity, x, y, angle)
    pub fn to_effect(&self) -> Effect {
        let mut effect = Effect::new();
        if let Some(gravity) = &self.gravity {
            effect = effect.with("gravity", gravity.as_str());
        }
        for (key, value) in [("x", &self.x), ("y", &self.y), ("angle", &self.angle)] {
            if let Some(value) = value {
                effect = effect.with(key, value.clone());
            }
        }
        effect
    }
}

/// Styling for a text layer. Every field is optional; see
/// [`super::text::build_text_spec`] for how absent fields default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    /// Number or numeric string
    #[serde(default)]
    pub font_size: Option<QualifierValue>,
    #[serde(default)]
    pub font_weight: Option<String>,
    #[serde(default)]
    pub font_style: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub stroke: bool,
    #[serde(default)]
    pub antialias: Option<String>,
    #[serde(default)]
    pub hinting: Option<String>,
    #[serde(default)]
    pub letter_spacing: Option<QualifierValue>,
    #[serde(default)]
    pub line_spacing: Option<QualifierValue>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

/// Text given either as a bare string (default styling) or a styled object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Plain(String),
    Styled(TextOptions),
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<TextOptions> for TextInput {
    fn from(value: TextOptions) -> Self {
        Self::Styled(value)
    }
}

/// Accepts `"relative"` as well as `["relative", "tiled"]`. Non-string
/// elements are dropped; any other shape yields no flags.
fn flag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    deserializer.deserialize_any(FlagListVisitor)
}

struct FlagListVisitor;

impl<'de> Visitor<'de> for FlagListVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a flag or a list of flags")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(vec![v.to_string()])
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(vec![v])
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut flags = Vec::new();
        while let Some(value) = seq.next_element::<QualifierValue>()? {
            if let QualifierValue::Text(flag) = value {
                flags.push(flag);
            }
        }
        Ok(flags)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Vec::new())
    }
}

/// One layer descriptor: an image (`publicId` or `url`) or a text block.
///
/// Keys not consumed by a named field (`width`, `crop`, `gravity`, `x`...)
/// are kept in [`Layer::qualifiers`] in input order and rendered against the
/// primary qualifier table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<TextInput>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub applied_effects: Vec<Effect>,
    #[serde(default, deserialize_with = "flag_list")]
    pub flags: Vec<String>,
    #[serde(default, deserialize_with = "flag_list")]
    pub applied_flags: Vec<String>,
    #[serde(flatten)]
    pub qualifiers: Effect,
}

impl Layer {
    pub fn from_public_id(public_id: impl Into<String>) -> Self {
        Self {
            public_id: Some(public_id.into()),
            ..Default::default()
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn from_text(text: impl Into<TextInput>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<QualifierValue>) -> Self {
        self.qualifiers = self.qualifiers.with(key, value);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_applied_effect(mut self, effect: Effect) -> Self {
        self.applied_effects.push(effect);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn with_applied_flag(mut self, flag: impl Into<String>) -> Self {
        self.applied_flags.push(flag.into());
        self
    }
}

/// Overlay options: an explicit list, or the top-level `text` shorthand.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayOptions {
    #[serde(default)]
    pub overlays: Option<Vec<Layer>>,
    #[serde(default)]
    pub text: Option<TextInput>,
}

impl OverlayOptions {
    /// Canonical overlay list. The `text` shorthand becomes a single text
    /// overlay only when no `overlays` list was given.
    pub fn layers(&self) -> Cow<'_, [Layer]> {
        match (&self.overlays, &self.text) {
            (Some(overlays), _) => Cow::Borrowed(overlays.as_slice()),
            (None, Some(text)) => Cow::Owned(vec![Layer::from_text(text.clone())]),
            (None, None) => Cow::Borrowed(&[]),
        }
    }
}
