//! Locking profiles: named sets of restriction ids that gate mutations.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Profile name implied by the document-wide lock flag.
///
/// When `Document::global_lock_applied` is set, every row and the document
/// itself resolve to this profile, ignoring per-row assignments.
pub const GLOBAL_LOCK_PROFILE: &str = "lock_all";

/// A single mutation gate that a locking profile can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Restriction {
    ChoiceAdd,
    ChoiceDelete,
    ChoiceValueEdit,
    ChoiceLabelEdit,
    ChoiceOrderEdit,
    QuestionAdd,
    QuestionDelete,
    QuestionLabelEdit,
    QuestionSettingsEdit,
    QuestionSkipLogicEdit,
    QuestionValidationEdit,
    QuestionOrderEdit,
    GroupAdd,
    GroupDelete,
    GroupLabelEdit,
    GroupSettingsEdit,
    GroupSkipLogicEdit,
    GroupSplit,
    FormAppearance,
    FormMetaEdit,
    FormReplace,
    FormStyle,
    TranslationsManage,
    LanguageEdit,
}

impl Restriction {
    /// Canonical wire name as stored in serialized profiles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Restriction::ChoiceAdd => "choice_add",
            Restriction::ChoiceDelete => "choice_delete",
            Restriction::ChoiceValueEdit => "choice_value_edit",
            Restriction::ChoiceLabelEdit => "choice_label_edit",
            Restriction::ChoiceOrderEdit => "choice_order_edit",
            Restriction::QuestionAdd => "question_add",
            Restriction::QuestionDelete => "question_delete",
            Restriction::QuestionLabelEdit => "question_label_edit",
            Restriction::QuestionSettingsEdit => "question_settings_edit",
            Restriction::QuestionSkipLogicEdit => "question_skip_logic_edit",
            Restriction::QuestionValidationEdit => "question_validation_edit",
            Restriction::QuestionOrderEdit => "question_order_edit",
            Restriction::GroupAdd => "group_add",
            Restriction::GroupDelete => "group_delete",
            Restriction::GroupLabelEdit => "group_label_edit",
            Restriction::GroupSettingsEdit => "group_settings_edit",
            Restriction::GroupSkipLogicEdit => "group_skip_logic_edit",
            Restriction::GroupSplit => "group_split",
            Restriction::FormAppearance => "form_appearance",
            Restriction::FormMetaEdit => "form_meta_edit",
            Restriction::FormReplace => "form_replace",
            Restriction::FormStyle => "form_style",
            Restriction::TranslationsManage => "translations_manage",
            Restriction::LanguageEdit => "language_edit",
        }
    }

    /// All defined restriction ids, in wire-name order.
    pub fn all() -> &'static [Restriction] {
        &[
            Restriction::ChoiceAdd,
            Restriction::ChoiceDelete,
            Restriction::ChoiceLabelEdit,
            Restriction::ChoiceOrderEdit,
            Restriction::ChoiceValueEdit,
            Restriction::FormAppearance,
            Restriction::FormMetaEdit,
            Restriction::FormReplace,
            Restriction::FormStyle,
            Restriction::GroupAdd,
            Restriction::GroupDelete,
            Restriction::GroupLabelEdit,
            Restriction::GroupSettingsEdit,
            Restriction::GroupSkipLogicEdit,
            Restriction::GroupSplit,
            Restriction::LanguageEdit,
            Restriction::QuestionAdd,
            Restriction::QuestionDelete,
            Restriction::QuestionLabelEdit,
            Restriction::QuestionOrderEdit,
            Restriction::QuestionSettingsEdit,
            Restriction::QuestionSkipLogicEdit,
            Restriction::QuestionValidationEdit,
            Restriction::TranslationsManage,
        ]
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Restriction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Restriction::all()
            .iter()
            .find(|restriction| restriction.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ModelError::UnknownRestriction(s.to_string()))
    }
}

impl serde::Serialize for Restriction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Restriction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named set of active restrictions, attachable to a document or a row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LockingProfile {
    pub name: String,
    pub restrictions: BTreeSet<Restriction>,
}

impl LockingProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            restrictions: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_restrictions(mut self, restrictions: impl IntoIterator<Item = Restriction>) -> Self {
        self.restrictions.extend(restrictions);
        self
    }

    /// A profile with every defined restriction active.
    pub fn fully_locked(name: impl Into<String>) -> Self {
        Self::new(name).with_restrictions(Restriction::all().iter().copied())
    }

    pub fn has(&self, restriction: Restriction) -> bool {
        self.restrictions.contains(&restriction)
    }
}
