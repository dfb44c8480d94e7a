//! Dictionary section - matches the password against the leaked corpus.

use secrecy::{ExposeSecret, SecretString};

use crate::corpus::Corpus;
use crate::substitution::SubstitutionTable;
use crate::types::DictionaryVerdict;

/// Checks the password against the corpus, most severe match first.
///
/// 1. Verbatim, case-sensitive equality with an entry: `DirectMatch`.
/// 2. A long entry (see [`Corpus::fragments`]) inside the lower-cased
///    password: `SubstringMatch`, returned as soon as it is found.
/// 3. A long entry inside the demunged lower-cased password: `DemungedMatch`,
///    but only once the whole corpus has been scanned without a substring hit.
pub fn match_dictionary(
    password: &SecretString,
    corpus: &Corpus,
    substitutions: &SubstitutionTable,
) -> DictionaryVerdict {
    let pwd = password.expose_secret();
    if corpus.contains(pwd) {
        return DictionaryVerdict::DirectMatch;
    }

    let lowered = pwd.to_lowercase();
    let demunged = substitutions.demunge(&lowered);

    let mut demunge_hit = false;
    for fragment in corpus.fragments() {
        if lowered.contains(fragment.as_str()) {
            return DictionaryVerdict::SubstringMatch;
        }
        if !demunge_hit && demunged.contains(fragment.as_str()) {
            demunge_hit = true;
        }
    }

    if demunge_hit {
        DictionaryVerdict::DemungedMatch
    } else {
        DictionaryVerdict::NotVulnerable
    }
}
