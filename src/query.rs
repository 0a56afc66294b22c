//! Query builder
//!
//! Maps a [`SearchCriteria`] record to the Google advanced-query string by
//! concatenating operator tokens in a fixed order. Pure and deterministic:
//! the same record always yields the same string, byte for byte. An empty
//! record yields the empty string, which callers treat as "no valid search".

use crate::criteria::SearchCriteria;

/// Build the advanced-query string for one criteria record.
///
/// Token order is fixed: all-words group, exact phrase, exclusions, OR
/// group, `site:`, `filetype:`, `intitle:`, `inurl:`, numeric range,
/// `before:`, `after:`. A token is emitted only when its source field is
/// non-empty after trimming.
pub fn build_query(criteria: &SearchCriteria) -> String {
    let mut pieces: Vec<String> = Vec::new();

    let all_words = criteria.all_words.trim();
    if !all_words.is_empty() {
        match criteria.terms_location.prefix() {
            Some(prefix) => pieces.push(format!("{}{}", prefix, all_words)),
            None => pieces.push(all_words.to_string()),
        }
    }

    let exact = criteria.exact_phrase.trim();
    if !exact.is_empty() {
        pieces.push(format!("\"{}\"", exact));
    }

    if !criteria.exclude_words.trim().is_empty() {
        let excluded = criteria
            .exclude_words
            .split_whitespace()
            .map(|word| format!("-{}", word))
            .collect::<Vec<_>>()
            .join(" ");
        pieces.push(excluded);
    }

    if let Some(group) = or_group(&criteria.or_words) {
        pieces.push(group);
    }

    push_operator(&mut pieces, "site:", &criteria.site);
    push_operator(&mut pieces, "filetype:", &criteria.filetype);
    push_operator(&mut pieces, "intitle:", &criteria.intitle);
    push_operator(&mut pieces, "inurl:", &criteria.inurl);

    if let Some(range) = numeric_range(criteria) {
        pieces.push(range);
    }

    if let Some(before) = criteria.before {
        pieces.push(format!("before:{}", before.format("%Y-%m-%d")));
    }

    if let Some(after) = criteria.after {
        pieces.push(format!("after:{}", after.format("%Y-%m-%d")));
    }

    pieces.join(" ").trim().to_string()
}

fn push_operator(pieces: &mut Vec<String>, operator: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pieces.push(format!("{}{}", operator, value));
    }
}

/// `word1|word2|word3` → `(word1 OR word2 OR word3)`. Empty segments are
/// dropped; `None` when nothing remains.
fn or_group(or_words: &str) -> Option<String> {
    let terms: Vec<&str> = or_words
        .split('|')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect();
    if terms.is_empty() {
        None
    } else {
        Some(format!("({})", terms.join(" OR ")))
    }
}

/// `<unit><from>..<unit><to>`, only when both bounds are present. The unit
/// prefixes both bounds and may be empty.
fn numeric_range(criteria: &SearchCriteria) -> Option<String> {
    let from = criteria.range_from.trim();
    let to = criteria.range_to.trim();
    if from.is_empty() || to.is_empty() {
        return None;
    }
    let unit = criteria.range_unit.trim();
    Some(format!("{}{}..{}{}", unit, from, unit, to))
}
