//! Prompts for the generative plugins (extract, recolor, remove).

use serde::Deserialize;

use super::overlays::QualifierValue;

/// A single prompt, or several that the service matches together
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Prompt {
    One(String),
    /// Non-string entries are kept here and skipped when formatting
    Many(Vec<QualifierValue>),
}

impl Prompt {
    /// `cat`, or `(cat;dog)` for a list. `None` when nothing usable is left.
    pub fn format(&self) -> Option<String> {
        match self {
            Self::One(prompt) if prompt.is_empty() => None,
            Self::One(prompt) => Some(prompt.clone()),
            Self::Many(prompts) => {
                let prompts: Vec<&str> = prompts
                    .iter()
                    .filter_map(QualifierValue::as_text)
                    .filter(|prompt| !prompt.is_empty())
                    .collect();
                if prompts.is_empty() {
                    None
                } else {
                    Some(format!("({})", prompts.join(";")))
                }
            }
        }
    }

    pub fn many<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(
            prompts
                .into_iter()
                .map(|prompt| QualifierValue::Text(prompt.into()))
                .collect(),
        )
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Prompt {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}
