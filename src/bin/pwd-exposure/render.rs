//! Colored presentation of reports and glossary entries.

use colored::{ColoredString, Colorize};
use pwd_exposure::{glossary, AnalysisReport, CrackTimeEstimate, DictionaryVerdict, StrengthTier};
use std::fmt::Write;

fn tier_colored(tier: StrengthTier) -> ColoredString {
    match tier {
        StrengthTier::Weak => tier.label().red(),
        StrengthTier::Medium => tier.label().yellow(),
        StrengthTier::Strong => tier.label().green(),
    }
}

fn verdict_colored(verdict: DictionaryVerdict) -> ColoredString {
    match verdict {
        DictionaryVerdict::DirectMatch => verdict.label().red(),
        DictionaryVerdict::SubstringMatch | DictionaryVerdict::DemungedMatch => {
            verdict.label().yellow()
        }
        DictionaryVerdict::NotVulnerable => verdict.label().green(),
    }
}

fn crack_time(estimate: &CrackTimeEstimate) -> String {
    format!("{} - {}", tier_colored(estimate.tier), estimate.span)
}

/// Renders a full report, one line per item.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let alphanumeracy = if report.alphanumeric {
        "Contains only letters and numbers"
    } else {
        "Contains more than just letters and numbers"
    };
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", alphanumeracy);
    let _ = writeln!(out, "Password Length: {}", report.length);
    let _ = writeln!(out, "Entropy: {:.2} bits", report.entropy);
    let _ = writeln!(out, "Lower End Estimate:");
    let _ = writeln!(out, "Brute Force Time Estimate: {}", crack_time(&report.brute_force.lower));
    let _ = writeln!(out, "Higher End Estimate:");
    let _ = writeln!(out, "Brute Force Time Estimate: {}", crack_time(&report.brute_force.upper));
    let _ = writeln!(out, "Dictionary Attack: {}", verdict_colored(report.dictionary));
    match &report.spray {
        Some(spray) => {
            let _ = writeln!(out, "Spray Attack Probability: {}", spray.to_string().red());
        }
        None => {
            let _ = writeln!(out, "Spray Attack Probability: N/A");
        }
    }

    out
}

/// Renders the explanation for a glossary query.
pub fn render_glossary(query: &str) -> String {
    match glossary::lookup(query) {
        Some(entry) => format!("\n{}: {}", entry.term.bold(), entry.explanation),
        None => "Sorry, the term you entered is not recognized.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwd_exposure::{analyze, Corpus, SubstitutionTable};
    use secrecy::SecretString;

    fn plain() {
        colored::control::set_override(false);
    }

    fn report_for(password: &str, entries: &[&str]) -> AnalysisReport {
        let corpus = Corpus::from_entries(entries.iter().copied());
        let pwd = SecretString::new(password.to_string().into());
        analyze(&pwd, &corpus, &SubstitutionTable::default())
    }

    #[test]
    fn test_render_direct_match() {
        plain();
        let mut entries = vec!["qwerty"];
        entries.extend(["dragon", "monkey", "letmein", "shadow", "master", "sunshine", "ashley", "bailey", "football"]);
        // 1 in 10, five draws: 0.1 * 5 / 10
        let text = render_report(&report_for("qwerty", &entries));
        assert!(text.contains("Contains only letters and numbers"));
        assert!(text.contains("Password Length: 6"));
        assert!(text.contains("Dictionary Attack: Vulnerable"));
        assert!(text.contains("Spray Attack Probability: 5.00%"));
    }

    #[test]
    fn test_render_not_vulnerable() {
        plain();
        let text = render_report(&report_for("aaaa", &["qwerty"]));
        assert!(text.contains("Entropy: 0.00 bits"));
        assert!(text.contains("Weak - less than a second"));
        assert!(text.contains("Dictionary Attack: Not Vulnerable"));
        assert!(text.contains("Spray Attack Probability: N/A"));
    }

    #[test]
    fn test_render_glossary() {
        plain();
        assert!(render_glossary("s").starts_with("\nspray attack: "));
        assert_eq!(
            render_glossary("zzz"),
            "Sorry, the term you entered is not recognized."
        );
    }
}
