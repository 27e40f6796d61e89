//! The survey document: flat rows, shared choice lists, settings, locks.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::ids::ListName;
use crate::locking::LockingProfile;
use crate::row::Row;

/// Document-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Form-wide appearance style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Form-wide widget appearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    /// Declared translation names; index 0 is the default language.
    /// Empty for single-language documents with bare-string labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<Option<String>>,
    /// Document-level locking profile reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locking_profile: Option<String>,
}

/// A whole survey document as loaded from and saved to storage.
///
/// The flat `rows` list encodes the form tree through group begin/end
/// markers; `choices` is an independent flat list cross-referenced from
/// select-type rows by list name. Mutated in place during an editing
/// session, serialized whole on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub settings: DocumentSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locking_profiles: Vec<LockingProfile>,
    /// When set, every row resolves to the global lock profile.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub global_lock_applied: bool,
    /// Library-asset name; set on extracted documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Document {
    /// Index of the row whose identity matches, if any.
    pub fn row_index(&self, identity: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.identity() == identity)
    }

    /// The row whose identity matches, if any.
    pub fn row_by_identity(&self, identity: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.identity() == identity)
    }

    /// All choices belonging to one list, in document order.
    pub fn choices_for_list(&self, list: &ListName) -> Vec<&Choice> {
        self.choices
            .iter()
            .filter(|choice| &choice.list_name == list)
            .collect()
    }

    /// Look up a locking profile by name.
    pub fn locking_profile(&self, name: &str) -> Option<&LockingProfile> {
        self.locking_profiles
            .iter()
            .find(|profile| profile.name == name)
    }

    /// Number of declared translations (0 for single-language documents).
    pub fn translation_count(&self) -> usize {
        self.settings.translations.len()
    }

    /// Index of a named translation.
    pub fn translation_index(&self, language: &str) -> Option<usize> {
        self.settings
            .translations
            .iter()
            .position(|t| t.as_deref() == Some(language))
    }
}
