//! Offline password strength and leak-exposure analysis
//!
//! This library estimates how strong a password is with four heuristics:
//! character entropy, brute-force crack time, matching against a corpus of
//! leaked passwords, and the chance of falling to a password spray.
//!
//! # Features
//!
//! - `async` (default): Enables [`analyze_tx`] for channel-based delivery
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-exposure` command line tool
//!
//! # Environment Variables
//!
//! - `PWD_CORPUS_PATH`: Custom path to the leaked-password corpus
//!   (default: `./assets/leaked-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_exposure::{analyze, Corpus, SubstitutionTable};
//! use secrecy::SecretString;
//!
//! // Load the corpus once at startup
//! let corpus = Corpus::load().expect("Failed to load corpus");
//! let substitutions = SubstitutionTable::default();
//!
//! let password = SecretString::new("h3ll0m0m".to_string().into());
//! let report = analyze(&password, &corpus, &substitutions);
//!
//! println!("Entropy: {:.2} bits", report.entropy);
//! println!("Dictionary: {}", report.dictionary);
//! ```

// Internal modules
mod analyzer;
mod corpus;
mod sections;
mod substitution;
mod types;

pub mod glossary;

// Public API
pub use analyzer::{analyze, analyze_with_rates};
pub use corpus::{corpus_path, Corpus, CorpusError, MIN_FRAGMENT_LEN};
pub use sections::{
    entropy, estimate_brute_force, estimate_spray, estimate_with_rates, is_alphanumeric, length,
    match_dictionary, AttackRates, FAST_ATTACKER_RATE, SLOW_ATTACKER_RATE, SPRAY_ATTEMPTS,
};
pub use substitution::{SubstitutionTable, DEFAULT_SUBSTITUTIONS};
pub use types::{
    AnalysisReport, BruteForceEstimate, CrackTimeEstimate, DictionaryVerdict, SprayEstimate,
    StrengthTier, TimeSpan, TimeUnit, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    SECONDS_PER_MONTH, SECONDS_PER_WEEK, SECONDS_PER_YEAR,
};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;
