use super::types::{BankGroup, SearchHit};
use crate::meili::types::RawHit;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

/// Characters kept for a highlight excerpt or a fallback snippet.
const CONTEXT_LENGTH: usize = 200;
/// Characters of context kept on each side of a snippet match.
const SNIPPET_RADIUS: usize = 100;
/// Maximum number of context snippets per hit.
const MAX_SNIPPETS: usize = 3;

/// Turn a raw engine hit into a display record. `term` is the cleaned
/// free-text query used to locate context snippets.
pub fn shape_hit(hit: RawHit, term: &str) -> SearchHit {
    let context_snippets = extract_context_snippets(&hit.content, term, MAX_SNIPPETS);
    let highlight = extract_highlight(
        hit.formatted
            .as_ref()
            .map(|formatted| formatted.content.as_str())
            .filter(|content| !content.is_empty()),
        &hit.content,
    );
    let fee_amount = extract_fee_amount(&hit.content);

    SearchHit {
        id: hit.id,
        bank: hit.bank,
        filename: hit.filename,
        path: hit.path,
        page: hit.page,
        content: hit.content,
        highlight,
        context_snippets,
        fee_amount,
        category: hit.category,
    }
}

/// Partition shaped hits per bank. Members keep engine-returned order;
/// groups come back sorted alphabetically by bank name.
pub fn group_by_bank(hits: Vec<SearchHit>) -> Vec<BankGroup> {
    let mut groups: BTreeMap<String, Vec<SearchHit>> = BTreeMap::new();
    for hit in hits {
        groups.entry(hit.bank.clone()).or_default().push(hit);
    }

    groups
        .into_iter()
        .map(|(bank, results)| BankGroup { bank, results })
        .collect()
}

/// Derive the short excerpt shown under each result.
///
/// When the engine returned highlighted content, the excerpt is the first
/// window of up to 80 characters on each side of a `**...**` span, with the
/// markers removed. Otherwise it is a plain content prefix.
pub fn extract_highlight(formatted: Option<&str>, content: &str) -> String {
    if let Some(formatted) = formatted {
        let re = Regex::new(r".{0,80}\*\*.*?\*\*.{0,80}").unwrap();
        return match re.find(formatted) {
            Some(window) => window.as_str().replace("**", ""),
            None => char_range(formatted, 0, CONTEXT_LENGTH).to_string(),
        };
    }

    format!("{}...", char_range(content, 0, CONTEXT_LENGTH))
}

/// Collect up to `max` windows of page text around case-insensitive literal
/// matches of `term`. A candidate window is dropped when an already kept
/// snippet contains its core (the candidate minus ten characters at each
/// end). Falls back to a single content prefix when nothing matches.
pub fn extract_context_snippets(content: &str, term: &str, max: usize) -> Vec<String> {
    let mut snippets: Vec<String> = Vec::new();

    if !term.is_empty() {
        let re = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .unwrap();
        let total_chars = content.chars().count();

        for found in re.find_iter(content).take(max) {
            let match_start = content[..found.start()].chars().count();
            let match_chars = found.as_str().chars().count();
            let start = match_start.saturating_sub(SNIPPET_RADIUS);
            let end = (match_start + match_chars + SNIPPET_RADIUS).min(total_chars);

            let mut snippet = char_range(content, start, end).to_string();
            if start > 0 {
                snippet = format!("...{}", snippet);
            }
            if end < total_chars {
                snippet = format!("{}...", snippet);
            }

            let core = snippet_core(&snippet).to_string();
            if !snippets.iter().any(|existing| existing.contains(&core)) {
                snippets.push(snippet);
            }
        }
    }

    if snippets.is_empty() {
        vec![format!("{}...", char_range(content, 0, CONTEXT_LENGTH))]
    } else {
        snippets
    }
}

/// Find the first dollar amount on the page, e.g. `$1,234.56` -> `1,234.56`.
pub fn extract_fee_amount(content: &str) -> Option<String> {
    let re = Regex::new(r"\$(\d+(?:,\d{3})*(?:\.\d{2})?)").unwrap();
    re.captures(content).map(|cap| cap[1].to_string())
}

/// A snippet minus ten characters at each end, used for overlap dedup.
/// Short snippets are compared whole.
fn snippet_core(snippet: &str) -> &str {
    let chars = snippet.chars().count();
    if chars <= 20 {
        return snippet;
    }
    char_range(snippet, 10, chars - 10)
}

/// Slice by character positions. Page content is largely Greek, so byte
/// indexing is not an option.
fn char_range(s: &str, start: usize, end: usize) -> &str {
    &s[byte_index(s, start)..byte_index(s, end)]
}

fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map_or(s.len(), |(idx, _)| idx)
}
