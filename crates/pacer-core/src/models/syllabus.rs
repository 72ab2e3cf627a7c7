//! Syllabus tree: units contain chapters, chapters contain topics.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single teachable topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SyllabusTopic {
    pub title: String,
}

/// An ordered group of topics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SyllabusChapter {
    pub title: String,
    #[serde(default)]
    pub topics: Vec<SyllabusTopic>,
}

/// An ordered group of chapters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SyllabusUnit {
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<SyllabusChapter>,
}

/// Complete syllabus for one subject, in teaching order.
///
/// Serializes transparently as a JSON array of units:
///
/// ```rust
/// use pacer_core::models::Syllabus;
///
/// let syllabus: Syllabus = serde_json::from_str(
///     r#"[{"title": "Algebra", "chapters": [
///         {"title": "Linear Equations", "topics": [{"title": "One variable"}]}
///     ]}]"#,
/// )
/// .unwrap();
/// assert_eq!(syllabus.topic_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Syllabus(pub Vec<SyllabusUnit>);

impl Syllabus {
    /// Units in document order.
    pub fn units(&self) -> &[SyllabusUnit] {
        &self.0
    }

    /// Parse a syllabus from its JSON array form.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::Serialization` when `raw` is not a valid syllabus.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Number of leaf topics across the whole tree.
    pub fn topic_count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|unit| &unit.chapters)
            .map(|chapter| chapter.topics.len())
            .sum()
    }
}

impl From<Vec<SyllabusUnit>> for Syllabus {
    fn from(units: Vec<SyllabusUnit>) -> Self {
        Self(units)
    }
}
