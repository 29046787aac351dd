//! Keyword responder: first substring match over the ordered rule table.
//!
//! Matching is lax. Input is lowercased, trimmed, and given one trailing
//! space so that space-terminated patterns such as `"hi "` also match at the
//! end of a message. A pattern matches anywhere, with no word boundaries:
//! `"upi"` matches `"stupid"`, `"hey"` matches `"they"`, `"hi "` matches
//! `"sushi"`. Known false-positive sources; tighten only as a product
//! decision.

use rand::RngExt;

use crate::knowledge::{Category, FALLBACK_RESPONSES, RuleTable};

/// The first category, in table order, with a pattern occurring in `text`.
pub fn classify<'a>(text: &str, rules: &'a RuleTable) -> Option<&'a Category> {
    let normalized = format!("{} ", text.trim().to_lowercase());
    rules
        .categories()
        .iter()
        .find(|category| category.patterns.iter().any(|p| normalized.contains(p)))
}

/// The category that answers `text`: the first match, provided it has
/// responses. A matched but empty category answers nothing and later
/// categories are not consulted.
pub fn answering_category<'a>(text: &str, rules: &'a RuleTable) -> Option<&'a Category> {
    classify(text, rules).filter(|category| !category.responses.is_empty())
}

/// A random response from the answering category, or `None`.
pub fn match_rules<'a, R: RngExt>(
    text: &str,
    rules: &'a RuleTable,
    rng: &mut R,
) -> Option<&'a str> {
    let category = answering_category(text, rules)?;
    pick(&category.responses, rng)
}

/// Total responder: matching rule, otherwise a random fallback.
pub fn respond<R: RngExt>(text: &str, rules: &RuleTable, rng: &mut R) -> String {
    match match_rules(text, rules, rng) {
        Some(response) => response.to_string(),
        None => fallback(rng).to_string(),
    }
}

/// Uniformly random fallback response.
pub fn fallback<R: RngExt>(rng: &mut R) -> &'static str {
    pick(FALLBACK_RESPONSES, rng).unwrap_or_default()
}

fn pick<'a, R: RngExt>(candidates: &[&'a str], rng: &mut R) -> Option<&'a str> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
