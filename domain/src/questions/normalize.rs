//! Question-list normalization.
//!
//! The generation service returns lists with inconsistent markers
//! (`1.`, `2)`, `-`, `*`, `•`, `Q3:` ...). These rules strip them so nothing
//! downstream depends on the reply's formatting.
//!
//! # Rules
//!
//! | # | Rule |
//! |---|------|
//! | 1 | Each line is handled on its own |
//! | 2 | A leading `Q`/`q` directly followed by a digit is part of the prefix |
//! | 3 | Leading bullets, digits and list punctuation are stripped (see [`is_prefix_char`]) |
//! | 4 | The remainder is trimmed |
//! | 5 | Lines that end up empty are dropped |
//!
//! A question that genuinely starts with a number (`"3 reasons ..."`) loses
//! that number. The prompt asks for plain questions, so this is accepted.

use crate::core::question::Question;

/// Characters removed from the start of a line.
fn is_prefix_char(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || matches!(c, '•' | '·' | '-' | '*' | '.' | ')' | ':' | '–')
}

/// Normalize one line. Returns `None` when nothing is left.
pub fn normalize_question_line(line: &str) -> Option<Question> {
    let mut rest = line.trim_start();

    // "Q1." / "q2)" style prefixes
    let mut chars = rest.chars();
    if let (Some('Q' | 'q'), Some(second)) = (chars.next(), chars.next())
        && second.is_ascii_digit()
    {
        rest = &rest[1..];
    }

    Question::try_new(rest.trim_start_matches(is_prefix_char))
}

/// Normalize a whole reply into an ordered list of questions.
///
/// Never fails: an empty or unusable reply yields an empty list.
pub fn normalize_question_list(response: &str) -> Vec<Question> {
    response
        .lines()
        .filter_map(normalize_question_line)
        .collect()
}
