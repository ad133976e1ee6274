//! Rule violation types.

use common::{CourseCode, TimeSlot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a registration was rejected.
///
/// The `Display` output is the message shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleViolation {
    /// Current plus requested credit hours exceed the limit.
    #[error("Gagal: Melebihi batas SKS (max {max_sks}).")]
    SksLimitExceeded { max_sks: u32, total: u64 },

    /// A requested course needs a course the student has not completed.
    #[error("Gagal: Prasyarat {prerequisite} belum terpenuhi untuk {course}.")]
    MissingPrerequisite {
        course: CourseCode,
        prerequisite: CourseCode,
    },

    /// A requested course meets in a slot that is already taken.
    #[error("Gagal: Jadwal bentrok untuk {course} pada slot {slot}.")]
    ScheduleConflict { course: CourseCode, slot: TimeSlot },

    /// Rejection raised by a caller-defined rule.
    #[error("{message}")]
    Custom { message: String },
}

impl RuleViolation {
    pub fn custom(message: impl Into<String>) -> Self {
        RuleViolation::Custom {
            message: message.into(),
        }
    }
}
