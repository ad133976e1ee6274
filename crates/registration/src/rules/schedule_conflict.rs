use std::collections::{HashMap, HashSet};

use common::{CourseCode, TimeSlot};

use super::ValidationRule;
use crate::error::RuleViolation;
use crate::registration::StudentRegistration;

/// The built-in course timetable.
///
/// CS101 and CS201 share `Mon-09` on purpose.
pub fn default_course_slots() -> HashMap<CourseCode, TimeSlot> {
    [
        ("CS101", "Mon-09"),
        ("CS102", "Tue-11"),
        ("CS201", "Mon-09"),
        ("MA101", "Wed-10"),
    ]
    .into_iter()
    .map(|(course, slot)| (CourseCode::new(course), TimeSlot::new(slot)))
    .collect()
}

/// Rejects a registration when a requested course meets in a taken slot.
///
/// A slot is taken if it is in the configured existing schedule, in the
/// student's own schedule, or was claimed by an earlier requested course.
/// Courses missing from the timetable never conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConflictRule {
    existing_schedule: Vec<TimeSlot>,
    course_slots: HashMap<CourseCode, TimeSlot>,
}

impl ScheduleConflictRule {
    /// Creates the rule with the built-in timetable.
    pub fn new<I, S>(existing_schedule: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TimeSlot>,
    {
        Self {
            existing_schedule: existing_schedule.into_iter().map(Into::into).collect(),
            course_slots: default_course_slots(),
        }
    }

    /// Replaces the timetable.
    pub fn with_course_slots<I, C, S>(mut self, course_slots: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<CourseCode>,
        S: Into<TimeSlot>,
    {
        self.course_slots = course_slots
            .into_iter()
            .map(|(course, slot)| (course.into(), slot.into()))
            .collect();
        self
    }

    pub fn existing_schedule(&self) -> &[TimeSlot] {
        &self.existing_schedule
    }

    pub fn slot_of(&self, course: &CourseCode) -> Option<&TimeSlot> {
        self.course_slots.get(course)
    }
}

impl Default for ScheduleConflictRule {
    fn default() -> Self {
        Self::new(std::iter::empty::<TimeSlot>())
    }
}

impl ValidationRule for ScheduleConflictRule {
    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation> {
        let mut occupied: HashSet<&TimeSlot> = self
            .existing_schedule
            .iter()
            .chain(reg.schedule.iter())
            .collect();

        for course in &reg.requested_courses {
            let Some(slot) = self.slot_of(course) else {
                continue;
            };
            if !occupied.insert(slot) {
                return Err(RuleViolation::ScheduleConflict {
                    course: course.clone(),
                    slot: slot.clone(),
                });
            }
        }
        Ok(())
    }
}
