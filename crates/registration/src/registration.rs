//! The registration request.

use common::{CourseCode, StudentId, TimeSlot};
use serde::{Deserialize, Serialize};

/// One attempt by a student to register for courses.
///
/// Rules only ever borrow it, so it cannot change during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub student_id: StudentId,
    pub name: String,

    /// Credit hours (SKS) the student already carries this term.
    pub current_sks: u32,

    /// Credit hours the student asks to add.
    pub requested_sks: u32,

    /// Courses already passed.
    pub completed_courses: Vec<CourseCode>,

    /// Courses to register for, in request order.
    pub requested_courses: Vec<CourseCode>,

    /// Slots the student already occupies.
    pub schedule: Vec<TimeSlot>,
}

impl StudentRegistration {
    /// Creates an empty request for a student.
    pub fn new(student_id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            current_sks: 0,
            requested_sks: 0,
            completed_courses: Vec::new(),
            requested_courses: Vec::new(),
            schedule: Vec::new(),
        }
    }

    pub fn with_sks(mut self, current: u32, requested: u32) -> Self {
        self.current_sks = current;
        self.requested_sks = requested;
        self
    }

    pub fn with_completed<I, C>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CourseCode>,
    {
        self.completed_courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_requested<I, C>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CourseCode>,
    {
        self.requested_courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_schedule<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TimeSlot>,
    {
        self.schedule = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Credit hours after this registration. Widened so the sum cannot overflow.
    pub fn total_sks(&self) -> u64 {
        u64::from(self.current_sks) + u64::from(self.requested_sks)
    }

    /// Returns true if the student has passed `course`.
    pub fn has_completed(&self, course: &CourseCode) -> bool {
        self.completed_courses.contains(course)
    }
}
