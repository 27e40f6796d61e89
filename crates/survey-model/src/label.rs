//! Label text that may be single-language or per-translation.

use serde::{Deserialize, Serialize};

/// Display text attached to a row or choice.
///
/// Single-language documents store labels as bare strings. Multi-language
/// documents store one slot per declared translation, where a slot is
/// `None` until the author diverges that language from the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelText {
    Single(String),
    Translated(Vec<Option<String>>),
}

impl LabelText {
    /// Resolve the label for one translation index.
    ///
    /// A bare string answers every index; a translated label answers only
    /// from its own slot.
    pub fn get(&self, translation_index: usize) -> Option<&str> {
        match self {
            LabelText::Single(text) => Some(text.as_str()),
            LabelText::Translated(slots) => {
                slots.get(translation_index).and_then(|slot| slot.as_deref())
            }
        }
    }

    /// Expand to one slot per declared translation.
    ///
    /// Bare strings move into slot 0; short slot vectors are padded with
    /// `None`. Lossless for already-complete labels.
    #[must_use]
    pub fn unnullified(&self, translation_count: usize) -> LabelText {
        let mut slots = match self {
            LabelText::Single(text) => vec![Some(text.clone())],
            LabelText::Translated(slots) => slots.clone(),
        };
        slots.resize(translation_count.max(slots.len()), None);
        LabelText::Translated(slots)
    }
}

impl From<&str> for LabelText {
    fn from(value: &str) -> Self {
        LabelText::Single(value.to_string())
    }
}

impl From<String> for LabelText {
    fn from(value: String) -> Self {
        LabelText::Single(value)
    }
}
