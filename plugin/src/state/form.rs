//! Raw form inputs and their conversion into a `BriefRequest`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::BriefRequest;

pub const DEFAULT_CONTENT_TYPE: &str = "blog post";
pub const DEFAULT_TONE: &str = "informative and professional";
pub const DEFAULT_AUDIENCE: &str = "general audience interested in the topic";

/// Current values of the six form inputs, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BriefForm {
    pub title: String,
    pub content_type: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub tone: String,
    pub audience: String,
    pub additional_notes: String,
}

impl BriefForm {
    /// Build the request body, substituting defaults for empty inputs.
    pub fn to_request(&self) -> BriefRequest {
        BriefRequest {
            title: self.title.clone(),
            content_type: or_default(&self.content_type, DEFAULT_CONTENT_TYPE),
            keywords: parse_keywords(&self.keywords),
            tone: or_default(&self.tone, DEFAULT_TONE),
            audience: or_default(&self.audience, DEFAULT_AUDIENCE),
            additional_notes: self.additional_notes.clone(),
        }
    }
}

/// Split on commas, trim each entry, and drop empties. Order is preserved.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(trim_keyword).filter(|k| !k.is_empty()).map(str::to_owned).collect()
}

/// Trims Unicode whitespace and the byte order mark, as browsers do.
fn trim_keyword(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_owned() } else { value.to_owned() }
}
