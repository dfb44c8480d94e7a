//! Password analyzer - assembles the strength report.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::corpus::Corpus;
use crate::sections::{
    entropy, estimate_spray, estimate_with_rates, is_alphanumeric, length, match_dictionary,
    AttackRates,
};
use crate::substitution::SubstitutionTable;
use crate::types::{AnalysisReport, DictionaryVerdict};

/// Analyzes a password and returns the full report.
///
/// # Arguments
/// * `password` - The password to analyze, expected to be non-empty
/// * `corpus` - Leaked passwords to match against
/// * `substitutions` - Table used to demunge the password
///
/// # Returns
/// An `AnalysisReport`. The same inputs always give the same report.
pub fn analyze(
    password: &SecretString,
    corpus: &Corpus,
    substitutions: &SubstitutionTable,
) -> AnalysisReport {
    analyze_with_rates(password, corpus, substitutions, AttackRates::default())
}

/// Same as [`analyze`] with custom brute-force attacker rates.
pub fn analyze_with_rates(
    password: &SecretString,
    corpus: &Corpus,
    substitutions: &SubstitutionTable,
    rates: AttackRates,
) -> AnalysisReport {
    let entropy = entropy(password);
    let brute_force = estimate_with_rates(entropy, rates);
    let dictionary = match_dictionary(password, corpus, substitutions);

    let spray = match dictionary {
        DictionaryVerdict::DirectMatch => estimate_spray(password, corpus),
        _ => None,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        entropy,
        verdict = %dictionary,
        lower_tier = %brute_force.lower.tier,
        upper_tier = %brute_force.upper.tier,
        "password analyzed"
    );

    AnalysisReport {
        alphanumeric: is_alphanumeric(password),
        length: length(password),
        entropy,
        brute_force,
        dictionary,
        spray,
    }
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    corpus: &Corpus,
    substitutions: &SubstitutionTable,
    tx: mpsc::Sender<AnalysisReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let report = analyze(password, corpus, substitutions);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_analyze_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let corpus = Corpus::from_entries(["password", "qwerty"]);

        analyze_tx(&secret("qwerty"), &corpus, &SubstitutionTable::default(), tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.dictionary, DictionaryVerdict::DirectMatch);
        assert!(report.spray.is_some());
    }

    #[tokio::test]
    async fn test_analyze_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let corpus = Corpus::from_entries(["password"]);

        // must not panic when nobody is listening
        analyze_tx(&secret("xyz"), &corpus, &SubstitutionTable::default(), tx).await;
    }
}
