//! The registration check before refactoring.
//!
//! One method, fixed limit, one hard-coded prerequisite and no working
//! schedule check. Kept for comparison with [`crate::RegistrationService`].

use common::CourseCode;

use crate::error::RuleViolation;
use crate::registration::StudentRegistration;

/// Monolithic registration validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorManager;

impl ValidatorManager {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if the registration passes every built-in check.
    pub fn validate(&self, reg: &StudentRegistration) -> bool {
        tracing::info!(
            "ValidatorManager: memulai validasi gabungan (Sks & Prasyarat & Jadwal)..."
        );

        let total = reg.total_sks();
        if total > 24 {
            let violation = RuleViolation::SksLimitExceeded { max_sks: 24, total };
            tracing::info!("{violation}");
            return false;
        }

        let intro = CourseCode::new("CS101");
        for course in &reg.requested_courses {
            if course == "CS201" && !reg.has_completed(&intro) {
                let violation = RuleViolation::MissingPrerequisite {
                    course: course.clone(),
                    prerequisite: intro.clone(),
                };
                tracing::info!("{violation}");
                return false;
            }
        }

        tracing::info!("Semua pengecekan pada ValidatorManager dilewati.");
        true
    }
}
