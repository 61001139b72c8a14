use crate::model::Item;

/// A normalized free-text query: trimmed and lowercased once, matched many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    term: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            term: raw.trim().to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring test against one attribute value.
    pub fn matches_value(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.term)
    }

    /// An empty query matches every item; otherwise ANY of `fields` must contain the term.
    pub fn matches<S: AsRef<str>>(&self, item: &Item, fields: &[S]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields
            .iter()
            .filter_map(|field| item.attr(field.as_ref()))
            .any(|value| self.matches_value(value))
    }
}
