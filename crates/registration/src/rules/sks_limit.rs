use serde::{Deserialize, Serialize};

use super::ValidationRule;
use crate::error::RuleViolation;
use crate::registration::StudentRegistration;

/// Credit-hour cap applied when none is configured.
pub const DEFAULT_MAX_SKS: u32 = 24;

/// Rejects a registration whose total credit hours exceed a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SksLimitRule {
    max_sks: u32,
}

impl SksLimitRule {
    pub fn new(max_sks: u32) -> Self {
        Self { max_sks }
    }

    pub fn max_sks(&self) -> u32 {
        self.max_sks
    }
}

impl Default for SksLimitRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SKS)
    }
}

impl ValidationRule for SksLimitRule {
    fn validate(&self, reg: &StudentRegistration) -> Result<(), RuleViolation> {
        let total = reg.total_sks();
        if total > u64::from(self.max_sks) {
            return Err(RuleViolation::SksLimitExceeded {
                max_sks: self.max_sks,
                total,
            });
        }
        Ok(())
    }
}
