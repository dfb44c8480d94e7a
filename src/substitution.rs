//! Character substitutions ("munging") undone before substring matching.

use std::collections::HashMap;

/// Default munged character → plain letter pairs.
pub const DEFAULT_SUBSTITUTIONS: &[(char, char)] = &[
    ('4', 'a'),
    ('@', 'a'),
    ('8', 'b'),
    ('(', 'c'),
    ('3', 'e'),
    ('6', 'g'),
    ('9', 'g'),
    ('#', 'h'),
    ('1', 'i'),
    ('!', 'i'),
    ('|', 'l'),
    ('0', 'o'),
    ('$', 's'),
    ('5', 's'),
    ('7', 't'),
    ('+', 't'),
    ('2', 'z'),
];

/// Immutable map from munged characters to their plain equivalents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    map: HashMap<char, char>,
}

impl SubstitutionTable {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Replaces every mapped character with its plain equivalent.
    ///
    /// Each character is looked up once; a replacement is never fed back
    /// through the table.
    pub fn demunge(&self, text: &str) -> String {
        text.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSTITUTIONS.iter().copied())
    }
}
