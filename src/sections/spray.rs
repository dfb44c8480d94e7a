//! Spray section - chance of being hit by a small random spray from the corpus.

use secrecy::{ExposeSecret, SecretString};

use crate::corpus::Corpus;
use crate::types::SprayEstimate;

/// Guesses an attacker gets before the account locks.
pub const SPRAY_ATTEMPTS: usize = 5;

/// Estimates the chance the password is among [`SPRAY_ATTEMPTS`] random draws
/// from the corpus.
///
/// Returns `None` when the password does not occur in the corpus verbatim.
pub fn estimate_spray(password: &SecretString, corpus: &Corpus) -> Option<SprayEstimate> {
    let frequency = corpus.frequency(password.expose_secret());
    if frequency == 0 {
        return None;
    }

    let corpus_size = corpus.len();
    let size = corpus_size as f64;
    let percentage = frequency as f64 / size * 100.0;
    let probability = (percentage / 100.0) * (SPRAY_ATTEMPTS as f64 / size);

    Some(SprayEstimate {
        frequency,
        corpus_size,
        percentage,
        probability,
    })
}
