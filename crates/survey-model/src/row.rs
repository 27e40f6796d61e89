//! Row types and the row structure of the flat survey encoding.
//!
//! A survey document stores its form tree as a flat, ordered list of rows.
//! Group begin/end markers encode the nesting; everything between a begin
//! marker and its matching end marker belongs to that group. Two pseudo-row
//! types (`score__row`, `rank__level`) are not questions structurally but
//! behave as questions for addressing purposes.

use std::fmt;
use std::str::FromStr;

use crate::ModelError;
use crate::ids::{ListName, RowKey};
use crate::label::LabelText;

/// Discriminant for every kind of row in the flat encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowType {
    // Data-bearing question types.
    Text,
    Integer,
    Decimal,
    Range,
    Note,
    Date,
    Time,
    DateTime,
    SelectOne,
    SelectMany,
    Rank,
    Score,
    Matrix,
    Rating,
    File,
    Image,
    Audio,
    Video,
    Geopoint,
    Barcode,
    Acknowledge,
    Calculate,

    // Auto-populated meta question types.
    Start,
    End,
    Today,
    DeviceId,
    Username,
    Audit,
    BackgroundAudio,

    // Structural markers.
    BeginGroup,
    EndGroup,
    BeginRepeat,
    EndRepeat,

    // Pseudo-rows: question-like for addressing, synthesized by the editor.
    ScoreRow,
    RankLevel,
}

impl RowType {
    /// Canonical wire name as stored in serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowType::Text => "text",
            RowType::Integer => "integer",
            RowType::Decimal => "decimal",
            RowType::Range => "range",
            RowType::Note => "note",
            RowType::Date => "date",
            RowType::Time => "time",
            RowType::DateTime => "datetime",
            RowType::SelectOne => "select_one",
            RowType::SelectMany => "select_multiple",
            RowType::Rank => "rank",
            RowType::Score => "score",
            RowType::Matrix => "matrix",
            RowType::Rating => "rating",
            RowType::File => "file",
            RowType::Image => "image",
            RowType::Audio => "audio",
            RowType::Video => "video",
            RowType::Geopoint => "geopoint",
            RowType::Barcode => "barcode",
            RowType::Acknowledge => "acknowledge",
            RowType::Calculate => "calculate",
            RowType::Start => "start",
            RowType::End => "end",
            RowType::Today => "today",
            RowType::DeviceId => "deviceid",
            RowType::Username => "username",
            RowType::Audit => "audit",
            RowType::BackgroundAudio => "background-audio",
            RowType::BeginGroup => "begin_group",
            RowType::EndGroup => "end_group",
            RowType::BeginRepeat => "begin_repeat",
            RowType::EndRepeat => "end_repeat",
            RowType::ScoreRow => "score__row",
            RowType::RankLevel => "rank__level",
        }
    }

    /// True for data-bearing question types (leaf rows a respondent answers).
    pub fn is_question(&self) -> bool {
        matches!(
            self,
            RowType::Text
                | RowType::Integer
                | RowType::Decimal
                | RowType::Range
                | RowType::Note
                | RowType::Date
                | RowType::Time
                | RowType::DateTime
                | RowType::SelectOne
                | RowType::SelectMany
                | RowType::Rank
                | RowType::Score
                | RowType::Matrix
                | RowType::Rating
                | RowType::File
                | RowType::Image
                | RowType::Audio
                | RowType::Video
                | RowType::Geopoint
                | RowType::Barcode
                | RowType::Acknowledge
                | RowType::Calculate
        )
    }

    /// True for auto-populated meta question types.
    pub fn is_meta(&self) -> bool {
        matches!(
            self,
            RowType::Start
                | RowType::End
                | RowType::Today
                | RowType::DeviceId
                | RowType::Username
                | RowType::Audit
                | RowType::BackgroundAudio
        )
    }

    /// True for the pseudo-row types that address like questions.
    pub fn is_pseudo(&self) -> bool {
        matches!(self, RowType::ScoreRow | RowType::RankLevel)
    }

    /// True for rows that address like questions.
    ///
    /// Meta rows are question-like only when the caller opts in.
    pub fn is_question_like(&self, include_meta: bool) -> bool {
        self.is_question() || self.is_pseudo() || (include_meta && self.is_meta())
    }

    /// True for select-one/select-many types that reference a choice list.
    pub fn is_select(&self) -> bool {
        matches!(self, RowType::SelectOne | RowType::SelectMany)
    }

    pub fn is_group_begin(&self) -> bool {
        matches!(self, RowType::BeginGroup | RowType::BeginRepeat)
    }

    pub fn is_group_end(&self) -> bool {
        matches!(self, RowType::EndGroup | RowType::EndRepeat)
    }

    pub fn is_repeat_begin(&self) -> bool {
        matches!(self, RowType::BeginRepeat)
    }

    pub fn is_repeat_end(&self) -> bool {
        matches!(self, RowType::EndRepeat)
    }

    /// The end-marker type matching a begin marker, if this is one.
    pub fn matching_end(&self) -> Option<RowType> {
        match self {
            RowType::BeginGroup => Some(RowType::EndGroup),
            RowType::BeginRepeat => Some(RowType::EndRepeat),
            _ => None,
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(RowType::Text),
            "integer" => Ok(RowType::Integer),
            "decimal" => Ok(RowType::Decimal),
            "range" => Ok(RowType::Range),
            "note" => Ok(RowType::Note),
            "date" => Ok(RowType::Date),
            "time" => Ok(RowType::Time),
            "datetime" => Ok(RowType::DateTime),
            "select_one" => Ok(RowType::SelectOne),
            "select_multiple" => Ok(RowType::SelectMany),
            "rank" => Ok(RowType::Rank),
            "score" => Ok(RowType::Score),
            "matrix" => Ok(RowType::Matrix),
            "rating" => Ok(RowType::Rating),
            "file" => Ok(RowType::File),
            "image" => Ok(RowType::Image),
            "audio" => Ok(RowType::Audio),
            "video" => Ok(RowType::Video),
            "geopoint" => Ok(RowType::Geopoint),
            "barcode" => Ok(RowType::Barcode),
            "acknowledge" => Ok(RowType::Acknowledge),
            "calculate" => Ok(RowType::Calculate),
            "start" => Ok(RowType::Start),
            "end" => Ok(RowType::End),
            "today" => Ok(RowType::Today),
            "deviceid" => Ok(RowType::DeviceId),
            "username" => Ok(RowType::Username),
            "audit" => Ok(RowType::Audit),
            "background-audio" => Ok(RowType::BackgroundAudio),
            "begin_group" => Ok(RowType::BeginGroup),
            "end_group" => Ok(RowType::EndGroup),
            "begin_repeat" => Ok(RowType::BeginRepeat),
            "end_repeat" => Ok(RowType::EndRepeat),
            "score__row" => Ok(RowType::ScoreRow),
            "rank__level" => Ok(RowType::RankLevel),
            other => Err(ModelError::UnknownRowType(other.to_string())),
        }
    }
}

impl serde::Serialize for RowType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RowType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry in the flat survey encoding.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub key: RowKey,
    #[serde(rename = "type")]
    pub row_type: RowType,
    /// Explicit name assigned by the form author (addressing identity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name generated by the editor when the author left `name` blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Choice list referenced by select-type rows.
    #[serde(default, rename = "list_name", skip_serializing_if = "Option::is_none")]
    pub list_reference: Option<ListName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    /// Expression restricting visible choices by a previous answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_filter: Option<String>,
    /// Per-row locking profile reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locking_profile: Option<String>,
}

impl Row {
    pub fn new(key: RowKey, row_type: RowType) -> Self {
        Self {
            key,
            row_type,
            name: None,
            autoname: None,
            label: None,
            required: None,
            list_reference: None,
            appearance: None,
            calculation: None,
            choice_filter: None,
            locking_profile: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_autoname(mut self, autoname: impl Into<String>) -> Self {
        self.autoname = Some(autoname.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<LabelText>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_list(mut self, list: ListName) -> Self {
        self.list_reference = Some(list);
        self
    }

    #[must_use]
    pub fn with_choice_filter(mut self, filter: impl Into<String>) -> Self {
        self.choice_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_locking_profile(mut self, profile: impl Into<String>) -> Self {
        self.locking_profile = Some(profile.into());
        self
    }

    /// Stable display/addressing name for this row.
    ///
    /// Precedence: explicit `name`, then `autoname`, then the internal key.
    /// Total; every row has at least a key.
    pub fn identity(&self) -> &str {
        if let Some(name) = self.name.as_deref()
            && !name.is_empty()
        {
            return name;
        }
        if let Some(autoname) = self.autoname.as_deref()
            && !autoname.is_empty()
        {
            return autoname;
        }
        self.key.as_str()
    }

    /// Build the end marker matching a begin-marker row.
    ///
    /// The end marker addresses as `/` plus the begin marker's identity, so
    /// group ranges can be located by identity alone.
    pub fn end_marker_for(begin: &Row) -> Option<Row> {
        let end_type = begin.row_type.matching_end()?;
        let mut end = Row::new(begin.key.end_marker(), end_type);
        if let Some(name) = begin.name.as_deref() {
            end.name = Some(format!("/{name}"));
        }
        Some(end)
    }
}
