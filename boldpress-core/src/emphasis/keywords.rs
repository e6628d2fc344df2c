//! Keyword collection used by the emphasis splitter.

use crate::error::{BoldpressError, Result};

/// An ordered set of phrases eligible for emphasis.
///
/// Keywords are kept sorted by descending length (counted in characters) so
/// that a multi-word phrase is tried before any shorter word it contains.
/// Keywords of equal length stay in declaration order. Duplicates are detected
/// case-insensitively and the first declaration wins.
///
/// # Example
///
/// ```rust
/// use boldpress::emphasis::KeywordSet;
///
/// let keywords = KeywordSet::new(["SQL", "data engineering", "sql"]).unwrap();
/// let ordered: Vec<&str> = keywords.iter().collect();
/// assert_eq!(ordered, vec!["data engineering", "SQL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    items: Vec<String>,
}

impl KeywordSet {
    /// Builds a set from any sequence of strings.
    ///
    /// # Errors
    ///
    /// Returns [`BoldpressError::EmptyKeyword`] if any keyword is the empty
    /// string. An empty keyword would match at every position of every line.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for keyword in keywords {
            set.insert(keyword.as_ref())?;
        }
        Ok(set)
    }

    /// Adds a keyword. Returns `false` if an equal keyword (ignoring case) was
    /// already present.
    pub fn insert(&mut self, keyword: impl Into<String>) -> Result<bool> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(BoldpressError::EmptyKeyword);
        }
        if self.contains(&keyword) {
            return Ok(false);
        }

        let len = keyword.chars().count();
        let position = self
            .items
            .iter()
            .position(|existing| existing.chars().count() < len)
            .unwrap_or(self.items.len());
        self.items.insert(position, keyword);
        Ok(true)
    }

    /// Merges another set into this one, keeping its relative order.
    pub fn extend_from(&mut self, other: &KeywordSet) {
        for keyword in &other.items {
            // `other` only ever holds non-empty keywords
            let _ = self.insert(keyword.as_str());
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, keyword: &str) -> bool {
        let lowered = keyword.to_lowercase();
        self.items.iter().any(|k| k.to_lowercase() == lowered)
    }

    /// Iterates keywords longest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_longest_first() {
        let set = KeywordSet::new(["Python", "Senior Python Automation Engineer", "SQL"]).unwrap();
        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(
            ordered,
            vec!["Senior Python Automation Engineer", "Python", "SQL"]
        );
    }

    #[test]
    fn test_equal_length_keeps_declaration_order() {
        let set = KeywordSet::new(["ETL", "SQL", "API", "pandas"]).unwrap();
        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(ordered, vec!["pandas", "ETL", "SQL", "API"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "café" is 4 characters but 5 bytes
        let set = KeywordSet::new(["abcd", "café"]).unwrap();
        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(ordered, vec!["abcd", "café"]);
    }

    #[test]
    fn test_rejects_empty_keyword() {
        let err = KeywordSet::new(["Python", ""]).unwrap_err();
        assert!(matches!(err, BoldpressError::EmptyKeyword));

        let mut set = KeywordSet::default();
        assert!(set.insert("").is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_case_insensitive_duplicates() {
        let mut set = KeywordSet::new(["Python"]).unwrap();
        assert!(!set.insert("PYTHON").unwrap());
        assert!(set.insert("numpy").unwrap());
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert_eq!(set.iter().next(), Some("Python"));
    }

    #[test]
    fn test_extend_from() {
        let mut set = KeywordSet::new(["Graduate Trainee", "KPA"]).unwrap();
        let other = KeywordSet::new(["SQL", "kpa", "ETL"]).unwrap();
        set.extend_from(&other);

        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(ordered, vec!["Graduate Trainee", "KPA", "SQL", "ETL"]);
    }
}
