//! Password analysis sections
//!
//! Each section computes one part of the strength report.

mod brute_force;
mod dictionary;
mod lexical;
mod spray;

pub use brute_force::{
    estimate_brute_force, estimate_with_rates, AttackRates, FAST_ATTACKER_RATE, SLOW_ATTACKER_RATE,
};
pub use dictionary::match_dictionary;
pub use lexical::{entropy, is_alphanumeric, length};
pub use spray::{estimate_spray, SPRAY_ATTEMPTS};
