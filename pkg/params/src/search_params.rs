use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// Ordered multimap of query parameters, behaving like the browser's
/// `URLSearchParams`: insertion order is kept, `set` overwrites the first
/// occurrence in place and drops any later duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for SearchParams {
    /// Renders `application/x-www-form-urlencoded` without a leading `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.pairs.iter());
        f.write_str(&serializer.finish())
    }
}

impl FromStr for SearchParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_or_without_question_mark() {
        let a = SearchParams::parse("?page=3&orderBy=createdAt");
        let b = SearchParams::parse("page=3&orderBy=createdAt");
        assert_eq!(a, b);
        assert_eq!(a.get("page"), Some("3"));
        assert_eq!(a.get("missing"), None);
    }

    #[test]
    fn decodes_and_encodes_form_values() {
        let params = SearchParams::parse("creator=a%40b.com&name=my+app");
        assert_eq!(params.get("creator"), Some("a@b.com"));
        assert_eq!(params.get("name"), Some("my app"));
        assert_eq!(params.to_string(), "creator=a%40b.com&name=my+app");
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut params = SearchParams::parse("a=1&b=2&a=3&c=4");
        params.set("a", "9");
        assert_eq!(params.to_string(), "a=9&b=2&c=4");

        params.set("d", "5");
        assert_eq!(params.to_string(), "a=9&b=2&c=4&d=5");
    }

    #[test]
    fn append_and_delete() {
        let mut params = SearchParams::new();
        params.append("tag", "x");
        params.append("tag", "y");
        let tags: Vec<_> = params.iter().collect();
        assert_eq!(tags, vec![("tag", "x"), ("tag", "y")]);

        params.delete("tag");
        assert!(!params.has("tag"));
        assert!(params.is_empty());
    }
}
