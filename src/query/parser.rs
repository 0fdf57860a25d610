use super::builder::{ParsedQuery, QueryBuilder};
use super::classifier::classify;
use super::tokenizer::tokenize;
use log::debug;

/// Parse a search string into a [`ParsedQuery`].
///
/// Returns `None` for an empty string. Never fails: malformed filter values
/// are carried through as NaN and unbalanced quotes only move token
/// boundaries.
pub fn parse(query: &str) -> Option<ParsedQuery> {
    if query.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new();
    builder.extend(tokenize(query).iter().map(classify));
    let parsed = builder.finish();

    debug!(
        "parsed {:?}: {} terms, {} filters, {} operators",
        query,
        parsed.terms.len(),
        parsed.filters.len(),
        parsed.operators.len()
    );

    Some(parsed)
}

/// Like [`parse`], treating an absent query the same as an empty one
pub fn parse_opt(query: Option<&str>) -> Option<ParsedQuery> {
    query.and_then(parse)
}
