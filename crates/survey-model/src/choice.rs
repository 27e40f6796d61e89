//! Choice-list entries shared by select-type questions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ChoiceKey, ListName};
use crate::label::LabelText;

/// One option entry in a named, shared choice list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub key: ChoiceKey,
    /// Value generated from the label when the author gave no explicit name.
    pub autovalue: String,
    pub name: String,
    pub label: LabelText,
    pub list_name: ListName,
    /// Cascading constraints: parent list name to required parent value.
    /// Empty for flat lists.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

impl Choice {
    pub fn new(
        key: ChoiceKey,
        list_name: ListName,
        name: impl Into<String>,
        label: impl Into<LabelText>,
    ) -> Self {
        let name = name.into();
        Self {
            key,
            autovalue: name.clone(),
            name,
            label: label.into(),
            list_name,
            filters: BTreeMap::new(),
        }
    }

    /// True when this choice is visible under the given parent selection.
    pub fn matches_filter(&self, parent_list: &str, parent_value: &str) -> bool {
        match self.filters.get(parent_list) {
            Some(required) => required == parent_value,
            None => true,
        }
    }
}
