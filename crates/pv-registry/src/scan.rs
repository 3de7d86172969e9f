//! Explicit-state scanner that projects the `"pipes"` object out of
//! loosely-JSON registry text.
//!
//! This is deliberately not a JSON parser. The honored shape is a flat
//! object of quoted names mapped to quoted URLs; everything else is
//! best-effort skipped, and structural damage degrades to an empty mapping
//! instead of an error.

use std::collections::BTreeMap;

const PIPES_KEY: &str = "\"pipes\"";

/// Extracts the flat string-to-string mapping nested under `"pipes"`.
pub fn parse_registry(text: &str) -> BTreeMap<String, String> {
    let Some(pipes_at) = text.find(PIPES_KEY) else {
        return BTreeMap::new();
    };

    let Some(open) = text[pipes_at..].find('{').map(|offset| pipes_at + offset) else {
        return BTreeMap::new();
    };

    let Some(close) = find_matching_brace(text, open) else {
        return BTreeMap::new();
    };

    collect_entries(&text[open + 1..close])
}

/// Walks forward from `open_brace` counting depth until it returns to zero.
///
/// Honored values never contain braces, so the counter is blind to quotes.
/// That keeps an unbalanced outer document parseable as long as the pipes
/// object itself balances.
fn find_matching_brace(text: &str, open_brace: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_brace).copied() != Some(b'{') {
        return None;
    }

    let mut idx = open_brace;
    let mut depth = 0_u32;

    while idx < bytes.len() {
        match bytes[idx] {
            b'{' => depth = depth.saturating_add(1),
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
        idx = idx.saturating_add(1);
    }

    None
}

/// Collects every `"key" : "value"` pair inside the pipes block.
///
/// Mirrors a global regex scan: a failed attempt at an opening quote resumes
/// at the next quote character, a successful match resumes after the value's
/// closing quote.
fn collect_entries(block: &str) -> BTreeMap<String, String> {
    let bytes = block.as_bytes();
    let mut entries = BTreeMap::new();
    let mut cursor = 0_usize;

    while let Some(offset) = next_quote(bytes, cursor) {
        match match_entry(block, offset) {
            Some((key, value, next_cursor)) => {
                entries.insert(key, value);
                cursor = next_cursor;
            }
            None => cursor = offset.saturating_add(1),
        }
    }

    entries
}

fn next_quote(bytes: &[u8], from: usize) -> Option<usize> {
    let mut idx = from;
    while idx < bytes.len() {
        if bytes[idx] == b'"' {
            return Some(idx);
        }
        idx = idx.saturating_add(1);
    }

    None
}

/// Attempts one full `"key"` `:` `"value"` match starting at `key_open`.
/// Returns the pair and the scan position just past the value.
fn match_entry(block: &str, key_open: usize) -> Option<(String, String, usize)> {
    let bytes = block.as_bytes();

    let key_close = quoted_run_end(bytes, key_open)?;
    let colon = skip_whitespace(bytes, key_close.saturating_add(1));
    if bytes.get(colon).copied() != Some(b':') {
        return None;
    }

    let value_open = skip_whitespace(bytes, colon.saturating_add(1));
    let value_close = quoted_run_end(bytes, value_open)?;

    let key = block[key_open + 1..key_close].to_owned();
    let value = block[value_open + 1..value_close].to_owned();
    Some((key, value, value_close.saturating_add(1)))
}

/// Matches `"..."` at `open` where the run between the quotes is non-empty
/// and quote-free (no escape support). Returns the closing quote position.
fn quoted_run_end(bytes: &[u8], open: usize) -> Option<usize> {
    if bytes.get(open).copied() != Some(b'"') {
        return None;
    }

    let mut idx = open.saturating_add(1);
    while idx < bytes.len() && bytes[idx] != b'"' {
        idx = idx.saturating_add(1);
    }

    if idx >= bytes.len() || idx == open + 1 {
        return None;
    }

    Some(idx)
}

fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    let mut idx = from;
    while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
        idx = idx.saturating_add(1);
    }

    idx
}
