//! Report types produced by the analysis engine.

use std::fmt;

/// Strength tier assigned to a crack-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human time units used to express a crack time, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
/// A month is a flat 30 days.
pub const SECONDS_PER_MONTH: f64 = 30.0 * SECONDS_PER_DAY;
/// A year is twelve 30-day months (31,104,000 s).
pub const SECONDS_PER_YEAR: f64 = 12.0 * SECONDS_PER_MONTH;

impl TimeUnit {
    /// Units in descending order of size.
    pub const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Length of one unit in seconds.
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Year => SECONDS_PER_YEAR,
            TimeUnit::Month => SECONDS_PER_MONTH,
            TimeUnit::Week => SECONDS_PER_WEEK,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Hour => SECONDS_PER_HOUR,
            TimeUnit::Minute => SECONDS_PER_MINUTE,
            TimeUnit::Second => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Year => "year(s)",
            TimeUnit::Month => "month(s)",
            TimeUnit::Week => "week(s)",
            TimeUnit::Day => "day(s)",
            TimeUnit::Hour => "hour(s)",
            TimeUnit::Minute => "minute(s)",
            TimeUnit::Second => "second(s)",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How long a brute-force search is expected to take, in human terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpan {
    LessThanSecond,
    Approx { amount: u64, unit: TimeUnit },
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpan::LessThanSecond => f.write_str("less than a second"),
            TimeSpan::Approx { amount, unit } => write!(f, "approximately {} {}", amount, unit),
        }
    }
}

/// One bound of the brute-force estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTimeEstimate {
    /// Raw estimate in seconds, always `>= 0` (may be `+inf`).
    pub seconds: f64,
    pub tier: StrengthTier,
    pub span: TimeSpan,
}

/// Crack times against a slow and a fast attacker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BruteForceEstimate {
    /// Slow attacker: the longer of the two times.
    pub lower: CrackTimeEstimate,
    /// Fast attacker: the shorter of the two times.
    pub upper: CrackTimeEstimate,
}

/// Outcome of matching a password against the leaked corpus.
///
/// Discriminants follow the historical numbering; use [`severity`](Self::severity)
/// for ordering by how bad the match is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DictionaryVerdict {
    NotVulnerable = 0,
    DirectMatch = 1,
    SubstringMatch = 2,
    DemungedMatch = 3,
}

impl DictionaryVerdict {
    /// Severity rank: `DirectMatch` (3) > `SubstringMatch` (2) > `DemungedMatch` (1) > `NotVulnerable` (0).
    pub fn severity(self) -> u8 {
        match self {
            DictionaryVerdict::DirectMatch => 3,
            DictionaryVerdict::SubstringMatch => 2,
            DictionaryVerdict::DemungedMatch => 1,
            DictionaryVerdict::NotVulnerable => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DictionaryVerdict::DirectMatch => "Vulnerable",
            DictionaryVerdict::SubstringMatch => "Somewhat Vulnerable",
            DictionaryVerdict::DemungedMatch => "Distantly Vulnerable",
            DictionaryVerdict::NotVulnerable => "Not Vulnerable",
        }
    }
}

impl fmt::Display for DictionaryVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chance that a password turns up in a small spray of corpus draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprayEstimate {
    /// Exact occurrences of the password in the corpus.
    pub frequency: usize,
    pub corpus_size: usize,
    /// Share of the corpus taken by the password, in percent.
    pub percentage: f64,
    /// Probability as a fraction in `[0, 1]`.
    pub probability: f64,
}

/// Below this probability the value is shown in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 0.01;

impl fmt::Display for SprayEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.probability < SCIENTIFIC_THRESHOLD {
            write!(f, "{:.2e}", self.probability)
        } else {
            write!(f, "{:.2}%", self.probability * 100.0)
        }
    }
}

/// Full result of analyzing one password.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Every character is a letter or digit.
    pub alphanumeric: bool,
    /// Length in characters.
    pub length: usize,
    /// Entropy in bits.
    pub entropy: f64,
    pub brute_force: BruteForceEstimate,
    pub dictionary: DictionaryVerdict,
    /// Present only for [`DictionaryVerdict::DirectMatch`].
    pub spray: Option<SprayEstimate>,
}
