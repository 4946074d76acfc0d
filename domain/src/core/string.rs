//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// First line of a model reply, trimmed.
///
/// Leading blank lines are skipped so a reply that starts with a newline
/// still yields its first line of content. Returns `""` when there is none.
pub fn first_line(s: &str) -> &str {
    s.trim().lines().next().map(str::trim).unwrap_or("")
}

/// Whether the text has no visible content.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
