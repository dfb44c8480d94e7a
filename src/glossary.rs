//! Explanations of the terms used in a report.

/// A glossary term and its explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub explanation: &'static str,
}

const ENTRIES: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "alphanumeracy",
        explanation: "Whether the password is made only of letters and numbers, \
            or also contains other characters such as symbols or spaces.",
    },
    GlossaryEntry {
        term: "length",
        explanation: "The number of characters in the password.",
    },
    GlossaryEntry {
        term: "entropy",
        explanation: "A measure of how unpredictable the password is, based on how many \
            different characters it uses and how long it is. It is given in bits: one bit \
            can tell apart two states, so every extra bit doubles the number of guesses \
            needed. More bits means a stronger password.",
    },
    GlossaryEntry {
        term: "brute force attack",
        explanation: "Guessing every possible password until the right one turns up. \
            Two times are shown: the lower estimate assumes an ordinary computer trying \
            about 2.5 billion passwords per second, the higher one a powerful machine \
            trying about 100 billion per second. Both are estimates and can be wrong.",
    },
    GlossaryEntry {
        term: "dictionary attack",
        explanation: "Trying passwords taken from a list, here a list of passwords leaked \
            in a real data breach. 'Vulnerable' means the password itself is on the list. \
            'Somewhat Vulnerable' means part of it is (for 'hellomom1', the list has \
            'hellomom'). 'Distantly Vulnerable' means part of it matches once common \
            substitutions are undone (for 'h3ll0m0m', the list has 'hellomom'). \
            'Not Vulnerable' means none of these were found. This is an estimate and \
            can be wrong.",
    },
    GlossaryEntry {
        term: "spray attack",
        explanation: "Trying a handful of common passwords against an account before it \
            locks. We assume 5 attempts, each picked at random from the leaked list, so \
            the chance is only shown for passwords marked 'Vulnerable'. It is the \
            probability that your password is one of the 5 picks. This is an estimate \
            and can be wrong.",
    },
];

/// All glossary terms, in display order.
pub fn terms() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.term)
}

/// Looks up a term, case-insensitively.
///
/// An exact term wins; otherwise the first term starting with `query` is
/// returned, so a single letter is enough. Blank queries match nothing.
pub fn lookup(query: &str) -> Option<&'static GlossaryEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    ENTRIES
        .iter()
        .find(|e| e.term == query)
        .or_else(|| ENTRIES.iter().find(|e| e.term.starts_with(&query)))
}
