//! Cell formatting for the record table.

/// Shown for an absent or blank text field.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Shown for an absent bound of a date range.
pub const UNKNOWN_DATE: &str = "?";

/// Inscriptions longer than this many characters are truncated.
pub const INSCRIPTION_BUDGET: usize = 80;

/// Text cell: the value, or [`PLACEHOLDER`] when absent or blank.
pub fn text_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => PLACEHOLDER,
    }
}

/// Cut `s` after `budget` characters and append an ellipsis. Strings within
/// the budget are returned unchanged.
pub fn truncate_chars(s: &str, budget: usize) -> String {
    match s.char_indices().nth(budget) {
        Some((byte_idx, _)) => {
            let mut out = s[..byte_idx].to_string();
            out.push('\u{2026}');
            out
        }
        None => s.to_string(),
    }
}

/// Inscriptions cell: truncated to [`INSCRIPTION_BUDGET`] characters.
pub fn inscription_cell(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => truncate_chars(s, INSCRIPTION_BUDGET),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Dates cell: `"start – end"`, `?` for a missing bound.
pub fn date_range(start: Option<i64>, end: Option<i64>) -> String {
    let fmt = |d: Option<i64>| d.map_or_else(|| UNKNOWN_DATE.to_string(), |d| d.to_string());
    format!("{} \u{2013} {}", fmt(start), fmt(end))
}

/// Render `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
