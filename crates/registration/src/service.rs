//! Registration coordinator.

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;
use crate::registration::StudentRegistration;
use crate::rules::ValidationRule;

/// Message returned when every rule passes.
pub const REGISTRATION_ACCEPTED: &str = "Registrasi berhasil.";

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// Every rule passed.
    Accepted,

    /// `rule` rejected the registration; later rules were not run.
    Rejected {
        rule: String,
        violation: RuleViolation,
    },
}

impl RegistrationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RegistrationOutcome::Accepted)
    }

    /// The message shown to the student.
    pub fn message(&self) -> String {
        match self {
            RegistrationOutcome::Accepted => REGISTRATION_ACCEPTED.to_string(),
            RegistrationOutcome::Rejected { violation, .. } => violation.to_string(),
        }
    }

    /// Name of the rule that rejected the registration, if any.
    pub fn rejected_by(&self) -> Option<&str> {
        match self {
            RegistrationOutcome::Accepted => None,
            RegistrationOutcome::Rejected { rule, .. } => Some(rule.as_str()),
        }
    }
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.is_accepted(), self.message())
    }
}

/// Runs an ordered list of rules against a registration.
///
/// The list is supplied by the caller; the service itself knows nothing
/// about credit limits, prerequisites or timetables.
#[derive(Default)]
pub struct RegistrationService {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RegistrationService {
    /// Creates a service running `rules` in the given order.
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Appends a rule after the existing ones.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the configured rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Validates `reg`, stopping at the first rule that rejects it.
    #[tracing::instrument(skip(self, reg), fields(student_id = %reg.student_id, rules = self.rules.len()))]
    pub fn register(&self, reg: &StudentRegistration) -> RegistrationOutcome {
        metrics::counter!("registration_attempts_total").increment(1);

        for rule in &self.rules {
            let name = rule.name();
            match rule.validate(reg) {
                Ok(()) => tracing::info!("[{name}] -> OK"),
                Err(violation) => {
                    tracing::info!("[{name}] -> FAIL - {violation}");
                    metrics::counter!("registration_rejected_total", "rule" => name.to_string())
                        .increment(1);
                    return RegistrationOutcome::Rejected {
                        rule: name.to_string(),
                        violation,
                    };
                }
            }
        }

        metrics::counter!("registration_accepted_total").increment(1);
        RegistrationOutcome::Accepted
    }
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FnRule, PrerequisiteRule, SksLimitRule};

    fn reg() -> StudentRegistration {
        StudentRegistration::new("S002", "Budi")
            .with_sks(18, 6)
            .with_completed(["CS101"])
            .with_requested(["CS201", "MA101"])
    }

    #[test]
    fn test_no_rules_accepts() {
        let outcome = RegistrationService::default().register(&reg());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.message(), "Registrasi berhasil.");
        assert_eq!(outcome.rejected_by(), None);
    }

    #[test]
    fn test_first_failure_wins() {
        let service = RegistrationService::new(vec![
            Box::new(SksLimitRule::new(20)),
            Box::new(PrerequisiteRule::new([("CS201", ["CS999"])])),
        ]);

        let outcome = service.register(&reg());

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.rejected_by(), Some("SksLimitRule"));
        assert_eq!(outcome.message(), "Gagal: Melebihi batas SKS (max 20).");
    }

    #[test]
    fn test_with_rule_appends() {
        let service = RegistrationService::default()
            .with_rule(SksLimitRule::default())
            .with_rule(FnRule::new("AlwaysReject", |_: &StudentRegistration| {
                Err(RuleViolation::custom("ditolak"))
            }));

        assert_eq!(service.rule_names(), vec!["SksLimitRule", "AlwaysReject"]);
        let outcome = service.register(&reg());
        assert_eq!(outcome.rejected_by(), Some("AlwaysReject"));
        assert_eq!(outcome.to_string(), "false ditolak");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(RegistrationOutcome::Accepted).unwrap();
        assert_eq!(json["result"], "accepted");

        let rejected = RegistrationOutcome::Rejected {
            rule: "SksLimitRule".to_string(),
            violation: RuleViolation::SksLimitExceeded {
                max_sks: 24,
                total: 26,
            },
        };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["result"], "rejected");
        assert_eq!(json["violation"]["kind"], "sks_limit_exceeded");

        let back: RegistrationOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, rejected);
    }
}
