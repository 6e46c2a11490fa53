//! Inbound query identity.

use serde::{Deserialize, Serialize};

/// A logical repository-listing query: the subject (organization or user
/// login) plus an optional free-text phrase matched against repository
/// names, and the requested page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Organization or user login whose repositories are listed.
    pub subject: String,
    /// Optional phrase filter. An empty string is normalized to `None`.
    pub phrase: Option<String>,
    /// Requested page, always >= 1.
    pub page: u32,
}

impl Query {
    /// Create a query. Non-positive pages normalize to 1 and an empty
    /// phrase normalizes to `None`.
    pub fn new(subject: impl Into<String>, phrase: Option<String>, page: u32) -> Self {
        Self {
            subject: subject.into(),
            phrase: phrase.filter(|p| !p.is_empty()),
            page: page.max(1),
        }
    }

    /// Cache partition key: `subject:phrase`. The page is deliberately not
    /// part of the key; the full result set is cached once per partition
    /// and re-sliced per request. An absent phrase leaves a trailing
    /// separator (`"acme:"`).
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.subject, self.phrase.as_deref().unwrap_or(""))
    }

    /// Display title for the rendered listing.
    pub fn title(&self) -> String {
        match &self.phrase {
            Some(phrase) => format!(
                "Repositories of '{}' including the phrase '{}'",
                self.subject, phrase
            ),
            None => format!("Repositories of '{}'", self.subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_without_phrase_keeps_trailing_separator() {
        let query = Query::new("acme", None, 1);
        assert_eq!(query.cache_key(), "acme:");
    }

    #[test]
    fn cache_key_with_phrase() {
        let query = Query::new("acme", Some("widget".to_string()), 3);
        assert_eq!(query.cache_key(), "acme:widget");
    }

    #[test]
    fn cache_key_ignores_page() {
        let a = Query::new("acme", Some("widget".to_string()), 1);
        let b = Query::new("acme", Some("widget".to_string()), 7);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn empty_phrase_normalizes_to_none() {
        let query = Query::new("acme", Some(String::new()), 1);
        assert_eq!(query.phrase, None);
        assert_eq!(query.cache_key(), "acme:");
    }

    #[test]
    fn page_zero_normalizes_to_one() {
        let query = Query::new("acme", None, 0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn title_without_phrase() {
        let query = Query::new("acme", None, 1);
        assert_eq!(query.title(), "Repositories of 'acme'");
    }

    #[test]
    fn title_with_phrase() {
        let query = Query::new("acme", Some("widget".to_string()), 1);
        assert_eq!(
            query.title(),
            "Repositories of 'acme' including the phrase 'widget'"
        );
    }
}
