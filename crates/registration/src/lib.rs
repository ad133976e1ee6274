//! Student course registration, before and after the refactoring.
//!
//! [`legacy::ValidatorManager`] hard-codes every check in one method.
//! [`RegistrationService`] runs an ordered list of [`ValidationRule`]s
//! supplied by the caller and stops at the first rejection. Adding a check
//! means adding a rule, not editing the service.

pub mod error;
pub mod legacy;
pub mod registration;
pub mod rules;
pub mod service;

pub use error::RuleViolation;
pub use legacy::ValidatorManager;
pub use registration::StudentRegistration;
pub use rules::{FnRule, PrerequisiteRule, ScheduleConflictRule, SksLimitRule, ValidationRule};
pub use service::{REGISTRATION_ACCEPTED, RegistrationOutcome, RegistrationService};
