//! Brute-force section - converts entropy into crack-time estimates.

use crate::types::{
    BruteForceEstimate, CrackTimeEstimate, StrengthTier, TimeSpan, TimeUnit, SECONDS_PER_DAY,
    SECONDS_PER_WEEK,
};

/// Guesses per second of an ordinary attacker.
pub const SLOW_ATTACKER_RATE: f64 = 2.5e9;
/// Guesses per second of a well-equipped attacker.
pub const FAST_ATTACKER_RATE: f64 = 1e11;

/// Guess rates for the two bounds of the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackRates {
    pub slow: f64,
    pub fast: f64,
}

impl Default for AttackRates {
    fn default() -> Self {
        Self {
            slow: SLOW_ATTACKER_RATE,
            fast: FAST_ATTACKER_RATE,
        }
    }
}

/// Estimates crack times using the default attacker rates.
pub fn estimate_brute_force(entropy: f64) -> BruteForceEstimate {
    estimate_with_rates(entropy, AttackRates::default())
}

/// Estimates crack times for a keyspace of `2^entropy` at the given rates.
///
/// `lower` is the slow attacker (longer time), `upper` the fast one.
pub fn estimate_with_rates(entropy: f64, rates: AttackRates) -> BruteForceEstimate {
    let keyspace = entropy.exp2();
    BruteForceEstimate {
        lower: classify(keyspace / rates.slow),
        upper: classify(keyspace / rates.fast),
    }
}

fn classify(seconds: f64) -> CrackTimeEstimate {
    if seconds < 1.0 {
        return CrackTimeEstimate {
            seconds,
            tier: StrengthTier::Weak,
            span: TimeSpan::LessThanSecond,
        };
    }

    // seconds >= 1 always matches TimeUnit::Second at the latest
    let unit = TimeUnit::DESCENDING
        .into_iter()
        .find(|unit| seconds >= unit.seconds())
        .unwrap_or(TimeUnit::Second);
    let breakpoint = unit.seconds();

    CrackTimeEstimate {
        seconds,
        tier: tier_for(breakpoint),
        // `as` saturates, so an infinite keyspace reports u64::MAX
        span: TimeSpan::Approx {
            amount: (seconds / breakpoint).floor() as u64,
            unit,
        },
    }
}

fn tier_for(breakpoint: f64) -> StrengthTier {
    if breakpoint <= SECONDS_PER_DAY {
        StrengthTier::Weak
    } else if breakpoint <= SECONDS_PER_WEEK {
        StrengthTier::Medium
    } else {
        StrengthTier::Strong
    }
}
