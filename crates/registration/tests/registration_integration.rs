//! Integration tests for the registration flow.
//!
//! Covers the coordinator's short-circuit behaviour with call-counting rule
//! stubs and the end-to-end registration scenarios.

use std::cell::Cell;
use std::rc::Rc;

use registration::{
    PrerequisiteRule, RegistrationOutcome, RegistrationService, RuleViolation,
    ScheduleConflictRule, SksLimitRule, StudentRegistration, ValidationRule, ValidatorManager,
};

/// Rule stub that counts its invocations and returns a fixed answer.
struct CountingRule {
    name: &'static str,
    reject_with: Option<&'static str>,
    calls: Rc<Cell<u32>>,
}

impl CountingRule {
    fn passing(name: &'static str) -> (Self, Rc<Cell<u32>>) {
        Self::build(name, None)
    }

    fn failing(name: &'static str, message: &'static str) -> (Self, Rc<Cell<u32>>) {
        Self::build(name, Some(message))
    }

    fn build(name: &'static str, reject_with: Option<&'static str>) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let rule = Self {
            name,
            reject_with,
            calls: Rc::clone(&calls),
        };
        (rule, calls)
    }
}

impl ValidationRule for CountingRule {
    fn name(&self) -> &str {
        self.name
    }

    fn validate(&self, _reg: &StudentRegistration) -> Result<(), RuleViolation> {
        self.calls.set(self.calls.get() + 1);
        match self.reject_with {
            Some(message) => Err(RuleViolation::custom(message)),
            None => Ok(()),
        }
    }
}

/// Budi's request: 18 + 6 SKS, CS201 and MA101, CS101 already passed.
fn budi() -> StudentRegistration {
    StudentRegistration::new("S002", "Budi")
        .with_sks(18, 6)
        .with_completed(["CS101"])
        .with_requested(["CS201", "MA101"])
        .with_schedule(["Wed-10"])
}

fn base_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(SksLimitRule::new(24)),
        Box::new(PrerequisiteRule::new([("CS201", ["CS101"])])),
    ]
}

mod short_circuit {
    use super::*;

    #[test]
    fn stops_at_first_failing_rule() {
        let (first, first_calls) = CountingRule::passing("First");
        let (second, second_calls) = CountingRule::failing("Second", "Gagal: kedua.");
        let (third, third_calls) = CountingRule::failing("Third", "Gagal: ketiga.");

        let service = RegistrationService::new(vec![
            Box::new(first),
            Box::new(second),
            Box::new(third),
        ]);
        let outcome = service.register(&budi());

        assert_eq!(outcome.message(), "Gagal: kedua.");
        assert_eq!(outcome.rejected_by(), Some("Second"));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 1);
        assert_eq!(third_calls.get(), 0);
    }

    #[test]
    fn runs_every_rule_when_all_pass() {
        let (a, a_calls) = CountingRule::passing("A");
        let (b, b_calls) = CountingRule::passing("B");

        let outcome = RegistrationService::default()
            .with_rule(a)
            .with_rule(b)
            .register(&budi());

        assert_eq!(outcome, RegistrationOutcome::Accepted);
        assert_eq!(a_calls.get(), 1);
        assert_eq!(b_calls.get(), 1);
    }

    #[test]
    fn rule_order_decides_reported_message() {
        let over_limit = budi().with_sks(20, 6).with_completed(Vec::<&str>::new());

        let sks_first = RegistrationService::new(base_rules()).register(&over_limit);
        assert_eq!(sks_first.message(), "Gagal: Melebihi batas SKS (max 24).");

        let prereq_first = RegistrationService::default()
            .with_rule(PrerequisiteRule::new([("CS201", ["CS101"])]))
            .with_rule(SksLimitRule::default())
            .register(&over_limit);
        assert_eq!(
            prereq_first.message(),
            "Gagal: Prasyarat CS101 belum terpenuhi untuk CS201."
        );
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn credit_limit_and_prerequisites_accept_budi() {
        let service = RegistrationService::new(base_rules());

        let outcome = service.register(&budi());

        assert!(outcome.is_accepted());
        assert_eq!(outcome.message(), "Registrasi berhasil.");
    }

    #[test]
    fn adding_schedule_rule_rejects_budi() {
        let service =
            RegistrationService::new(base_rules()).with_rule(ScheduleConflictRule::new(["Mon-09"]));

        let outcome = service.register(&budi());

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.rejected_by(), Some("ScheduleConflictRule"));
        assert_eq!(
            outcome.message(),
            "Gagal: Jadwal bentrok untuk CS201 pada slot Mon-09."
        );
    }

    #[test]
    fn legacy_validator_rejects_ani_over_limit() {
        let ani = StudentRegistration::new("S001", "Ani")
            .with_sks(20, 6)
            .with_completed(["CS101"])
            .with_requested(["CS201"])
            .with_schedule(["Tue-11"]);

        assert!(!ValidatorManager::new().validate(&ani));

        let outcome = RegistrationService::new(base_rules()).register(&ani);
        assert_eq!(outcome.rejected_by(), Some("SksLimitRule"));
    }

    #[test]
    fn legacy_and_refactored_agree_on_budi() {
        let legacy = ValidatorManager::new().validate(&budi());
        let refactored = RegistrationService::new(base_rules()).register(&budi());
        assert_eq!(legacy, refactored.is_accepted());
    }
}
