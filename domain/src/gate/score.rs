//! Match score value object and reply parsing.

use serde::{Deserialize, Serialize};

/// Compatibility score between a candidate document and a target document.
///
/// Always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MIN: MatchScore = MatchScore(0);
    pub const MAX: MatchScore = MatchScore(100);

    /// Create a score, clamping into `0..=100`.
    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a match score from a text-generation reply.
///
/// Only the first line is considered. Every ASCII digit on that line is kept,
/// in order, and the resulting number is clamped into `0..=100`. Anything
/// else (no digits, empty reply) yields `0`, so a malformed reply can never
/// admit a session.
///
/// Note that `"85/100"` reads as `85100` and clamps to `100`: the prompt asks
/// for a bare number and the digits are taken literally.
///
/// # Examples
///
/// ```
/// use interview_domain::gate::parse_match_score;
///
/// assert_eq!(parse_match_score("72").value(), 72);
/// assert_eq!(parse_match_score("Score: 64%\nbecause...").value(), 64);
/// assert_eq!(parse_match_score("excellent fit").value(), 0);
/// assert_eq!(parse_match_score("250").value(), 100);
/// ```
pub fn parse_match_score(response: &str) -> MatchScore {
    let first_line = response.lines().next().unwrap_or("");
    let digits: String = first_line.chars().filter(|c| c.is_ascii_digit()).collect();

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return MatchScore::MIN;
    }
    // More than three significant digits is always above 100
    if significant.len() > 3 {
        return MatchScore::MAX;
    }

    significant
        .parse::<u32>()
        .map(MatchScore::new)
        .unwrap_or(MatchScore::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_match_score("85").value(), 85);
        assert_eq!(parse_match_score("  7 ").value(), 7);
        assert_eq!(parse_match_score("0").value(), 0);
        assert_eq!(parse_match_score("100").value(), 100);
    }

    #[test]
    fn test_only_first_line_counts() {
        assert_eq!(parse_match_score("Match: 64\nYears: 5").value(), 64);
        assert_eq!(parse_match_score("no score\n90").value(), 0);
    }

    #[test]
    fn test_digits_are_concatenated() {
        assert_eq!(parse_match_score("7 5").value(), 75);
        assert_eq!(parse_match_score("85/100").value(), 100);
    }

    #[test]
    fn test_clamps_to_hundred() {
        assert_eq!(parse_match_score("101").value(), 100);
        assert_eq!(parse_match_score("99999999999999999999999999").value(), 100);
        assert_eq!(parse_match_score("0042").value(), 42);
    }

    #[test]
    fn test_no_digits_yields_zero() {
        assert_eq!(parse_match_score("").value(), 0);
        assert_eq!(parse_match_score("strong candidate").value(), 0);
        assert_eq!(parse_match_score("\n80").value(), 0);
        assert_eq!(parse_match_score("-").value(), 0);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(parse_match_score("²").value(), 0);
    }

    #[test]
    fn test_score_always_in_range() {
        for input in ["", "abc", "55", "1000", "-20", "3.5", "９０", "100%", "0000"] {
            let score = parse_match_score(input).value();
            assert!(score <= 100, "{input:?} produced {score}");
        }
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(MatchScore::new(250).value(), 100);
        assert_eq!(MatchScore::new(60).to_string(), "60");
    }
}
