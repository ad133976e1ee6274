use std::collections::HashMap;

use common::CourseCode;

use super::ValidationRule;
use crate::error::RuleViolation;
use crate::registration::StudentRegistration;

/// Rejects a registration when a requested course's prerequisite is missing.
///
/// Courses without an entry in the map have no prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteRule {
    prerequisites: HashMap<CourseCode, Vec<CourseCode>>,
}

impl PrerequisiteRule {
    /// Builds the rule from `(course, prerequisites)` pairs.
    ///
    /// The pairs are copied, so later changes to the caller's data do not
    /// affect the rule.
    pub fn new<I, C, P>(prerequisites: I) -> Self
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<CourseCode>,
        P: IntoIterator,
        P::Item: Into<CourseCode>,
    {
        let prerequisites = prerequisites
            .into_iter()
            .map(|(course, reqs)| (course.into(), reqs.into_iter().map(Into::into).collect()))
            .collect();
        Self { prerequisites }
    }

    /// Prerequisites configured for `course`, empty if none.
    pub fn prerequisites_of(&self, course: &CourseCode) -> &[CourseCode] {
        self.prerequisites
            .get(course)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ValidationRule for PrerequisiteRule {
    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation> {
        for course in &reg.requested_courses {
            if let Some(missing) = self
                .prerequisites_of(course)
                .iter()
                .find(|req| !reg.has_completed(req))
            {
                return Err(RuleViolation::MissingPrerequisite {
                    course: course.clone(),
                    prerequisite: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(completed: &[&str], requested: &[&str]) -> StudentRegistration {
        StudentRegistration::new("S002", "Budi")
            .with_completed(completed.iter().copied())
            .with_requested(requested.iter().copied())
    }

    #[test]
    fn test_met_prerequisite_passes() {
        let rule = PrerequisiteRule::new([("CS201", ["CS101"])]);
        assert!(rule.validate(&reg(&["CS101"], &["CS201", "MA101"])).is_ok());
    }

    #[test]
    fn test_missing_prerequisite_fails() {
        let rule = PrerequisiteRule::new([("CS201", ["CS101"])]);
        let err = rule.validate(&reg(&[], &["CS201"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gagal: Prasyarat CS101 belum terpenuhi untuk CS201."
        );
    }

    #[test]
    fn test_unconfigured_course_always_passes() {
        let rule = PrerequisiteRule::default();
        assert!(rule.validate(&reg(&[], &["CS301", "MA101"])).is_ok());
        assert!(rule.prerequisites_of(&CourseCode::new("CS301")).is_empty());
    }

    #[test]
    fn test_reports_first_missing_in_request_order() {
        let rule = PrerequisiteRule::new([
            ("CS301", vec!["CS201", "MA201"]),
            ("CS202", vec!["CS101"]),
        ]);
        let err = rule
            .validate(&reg(&["CS201"], &["CS202", "CS301"]))
            .unwrap_err();
        assert_eq!(
            err,
            RuleViolation::MissingPrerequisite {
                course: "CS202".into(),
                prerequisite: "CS101".into(),
            }
        );

        let err = rule
            .validate(&reg(&["CS101", "CS201"], &["CS202", "CS301"]))
            .unwrap_err();
        assert_eq!(
            err,
            RuleViolation::MissingPrerequisite {
                course: "CS301".into(),
                prerequisite: "MA201".into(),
            }
        );
    }

    #[test]
    fn test_owns_its_configuration() {
        let mut source = HashMap::new();
        source.insert("CS201".to_string(), vec!["CS101".to_string()]);
        let rule = PrerequisiteRule::new(source.clone());

        source.clear();

        assert_eq!(
            rule.prerequisites_of(&CourseCode::new("CS201")),
            &[CourseCode::new("CS101")]
        );
    }
}
