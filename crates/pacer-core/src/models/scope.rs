//! Scheduling scope identifying one pacing schedule.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The (school, class, section, subject, academic year) tuple that owns a
/// lesson plan. A commit replaces every record of exactly one scope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Scope {
    /// Tenant (school) identifier
    pub school_id: u64,
    /// Class identifier
    pub class_id: u64,
    /// Section identifier within the class
    pub section_id: u64,
    /// Subject identifier
    pub subject_id: u64,
    /// Academic year identifier
    pub academic_year_id: u64,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "school {} / class {} / section {} / subject {} / year {}",
            self.school_id, self.class_id, self.section_id, self.subject_id, self.academic_year_id
        )
    }
}
