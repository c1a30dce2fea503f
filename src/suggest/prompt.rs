//! Prompt construction and response-text parsing for idea generation.
//!
//! The model is asked for a bare comma-separated list, so the whole parsing
//! story is: split on commas, trim, drop empties. Anything fancier (numbered
//! lists, prose preambles) is the model ignoring instructions, and the split
//! degrades gracefully on those too.

/// Builds the generation prompt for a seed keyword.
///
/// The seed is embedded verbatim; the instructions pin the output format so
/// [`parse_idea_list`] can stay trivial.
pub fn build_prompt(seed: &str) -> String {
    format!(
        "Generate 10-15 keyword ideas for the seed keyword \"{seed}\". \
         Cover a mix of informational, commercial, and navigational search intent, \
         and include long-tail variants. \
         Respond with ONLY a comma-separated list of keyword phrases, \
         with no numbering, no bullets, and no extra commentary."
    )
}

/// Splits a model response into an ordered idea list.
///
/// Commas delimit ideas; each piece is trimmed and empty pieces are dropped,
/// so doubled commas and stray whitespace never produce blank entries.
pub fn parse_idea_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
