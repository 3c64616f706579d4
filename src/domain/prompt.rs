//! Classification prompt construction.

use crate::domain::entities::LinkSet;

/// System message sent ahead of every classification prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

const INSTRUCTION: &str = "From the following links, identify only the social media links, \
and return them in JSON format as follows: {\"social_media_links\": [\"link1\", \"link2\", ...]}";

/// Builds the user prompt asking the model to pick the social-media links.
///
/// Links are embedded verbatim, one per line. Nothing is escaped: a link that
/// contains a newline or instructions of its own is passed through unchanged.
pub fn build_classification_prompt(links: &LinkSet) -> String {
    let joined = links
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{INSTRUCTION}\n\nLinks:\n{joined}")
}
