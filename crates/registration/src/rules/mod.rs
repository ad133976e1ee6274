//! Validation rules.
//!
//! Each rule checks one concern and reports the first problem it finds.
//! Rules are configured at construction and never change afterward.

mod prerequisite;
mod schedule_conflict;
mod sks_limit;

pub use prerequisite::PrerequisiteRule;
pub use schedule_conflict::{ScheduleConflictRule, default_course_slots};
pub use sks_limit::{DEFAULT_MAX_SKS, SksLimitRule};

use crate::error::RuleViolation;
use crate::registration::StudentRegistration;

/// A single check applied to a registration.
pub trait ValidationRule {
    /// Name shown in the service log. Defaults to the type name.
    ///
    /// The default keeps only the text after the last `::`, so a generic
    /// rule type would get a mangled name such as `Foo>`. Generic rules
    /// should override this, as [`FnRule`] does.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Returns `Ok(())` if the registration passes this rule.
    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation>;
}

impl<R: ValidationRule + ?Sized> ValidationRule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation> {
        (**self).validate(reg)
    }
}

/// A rule built from a name and a closure.
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&StudentRegistration) -> Result<(), RuleViolation>,
{
    pub fn new(name: impl Into<String>, check: F) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

impl<F> ValidationRule for FnRule<F>
where
    F: Fn(&StudentRegistration) -> Result<(), RuleViolation>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation> {
        (self.check)(reg)
    }
}

impl<F> std::fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}
