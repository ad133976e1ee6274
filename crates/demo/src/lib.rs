//! Scripted walkthrough of both refactorings.
//!
//! Each scenario builds its data, wires the collaborators and returns the
//! final decision. [`run`] executes them in order and writes the summary
//! lines; step-by-step detail goes through `tracing`.

pub mod config;

use std::io::Write;

use checkout::{
    CheckoutError, LogNotificationService, Money, Order, OrderManager, OrderService,
    PaymentMethod,
};
use registration::{
    PrerequisiteRule, RegistrationOutcome, RegistrationService, ScheduleConflictRule,
    SksLimitRule, StudentRegistration, ValidationRule, ValidatorManager,
};

use config::Config;

fn demo_order() -> Order {
    Order::new("Moja", Money::from_rupiah(150_000))
}

/// Checkout through the monolithic manager with a method label.
pub fn checkout_before(payment_method: &str) -> (Order, bool) {
    let mut order = demo_order();
    let ok = OrderManager::new().process_checkout(&mut order, payment_method);
    (order, ok)
}

/// Checkout through the coordinator with the chosen strategy.
pub fn checkout_after(method: PaymentMethod) -> (Order, Result<(), CheckoutError>) {
    let mut order = demo_order();
    let service = OrderService::new(method.processor(), LogNotificationService);
    let result = service.checkout(&mut order);
    (order, result)
}

/// Ani: 20 + 6 SKS, asks for CS201 with CS101 done.
pub fn registration_before() -> bool {
    let reg = StudentRegistration::new("S001", "Ani")
        .with_sks(20, 6)
        .with_completed(["CS101"])
        .with_requested(["CS201"])
        .with_schedule(["Tue-11"]);
    ValidatorManager::new().validate(&reg)
}

/// Budi: 18 + 6 SKS, asks for CS201 and MA101 with CS101 done.
///
/// With `include_schedule_rule` a schedule rule holding `Mon-09` is appended
/// to the list; the service itself is unchanged.
pub fn registration_after(include_schedule_rule: bool) -> RegistrationOutcome {
    let reg = StudentRegistration::new("S002", "Budi")
        .with_sks(18, 6)
        .with_completed(["CS101"])
        .with_requested(["CS201", "MA101"])
        .with_schedule(["Wed-10"]);

    let mut rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(SksLimitRule::new(24)),
        Box::new(PrerequisiteRule::new([("CS201", ["CS101"])])),
    ];
    if include_schedule_rule {
        rules.push(Box::new(ScheduleConflictRule::new(["Mon-09"])));
    }

    RegistrationService::new(rules).register(&reg)
}

/// Runs every scenario and writes one summary block per scenario to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "=== Demo BEFORE refactor (OrderManager) ===")?;
    let (order, ok) = checkout_before("credit_card");
    writeln!(out, "Hasil OrderManager: {ok}")?;
    writeln!(out, "Status Order: {}", order.status())?;
    writeln!(out)?;

    writeln!(
        out,
        "=== Demo AFTER refactor (OrderService, {}) ===",
        config.payment_method
    )?;
    let (order, result) = checkout_after(config.payment_method);
    if let Err(err) = &result {
        tracing::warn!(error = %err, "checkout failed");
    }
    writeln!(out, "Hasil OrderService: {}", result.is_ok())?;
    writeln!(out, "Status Order: {}", order.status())?;
    writeln!(out)?;

    writeln!(out, "=== Demo BEFORE refactor (ValidatorManager) ===")?;
    writeln!(out, "Hasil ValidatorManager: {}", registration_before())?;
    writeln!(out)?;

    for include_schedule_rule in [false, true] {
        writeln!(
            out,
            "=== Demo AFTER refactor (RegistrationService with Rules) ==="
        )?;
        let outcome = registration_after(include_schedule_rule);
        writeln!(out, "Hasil RegistrationService: {outcome}")?;
        writeln!(out)?;
    }

    Ok(())
}
