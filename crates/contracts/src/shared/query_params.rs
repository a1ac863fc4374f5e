//! Ordered query-string parameters
//!
//! Behaves like the browser's `URLSearchParams`: keys may repeat, insertion
//! order is preserved, and `set` collapses every occurrence of a key into one.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value without touching existing occurrences of the key
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace all occurrences of `key` with a single value.
    ///
    /// The value takes the position of the first occurrence, or goes to the
    /// end when the key was absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `key=value&key=value` string without a leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a query string; a leading `?` is ignored, `+` decodes to a space.
    ///
    /// Malformed percent-escapes are kept verbatim rather than rejected.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (k, v) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();
        Self { pairs }
    }

    /// Parameters of the query part of `url` (everything after the first `?`)
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((_, query)) => Self::parse(query.split('#').next().unwrap_or(query)),
            None => Self::new(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_collapses_repeated_keys_in_place() {
        let mut params: QueryParams =
            [("status", "paid"), ("search", "acme"), ("status", "pending")]
                .into_iter()
                .collect();
        params.set("status", "scheduled");
        assert_eq!(params.to_query_string(), "status=scheduled&search=acme");
    }

    #[test]
    fn test_set_appends_missing_key() {
        let mut params = QueryParams::new();
        params.append("search", "acme");
        params.set("page", "1");
        assert_eq!(params.to_query_string(), "search=acme&page=1");
    }

    #[test]
    fn test_repeated_values_keep_order() {
        let params = QueryParams::parse("?status=paid&status=pending&page=2");
        assert_eq!(params.get_all("status"), vec!["paid", "pending"]);
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn test_encoding_of_special_characters() {
        let mut params = QueryParams::new();
        params.append("search", "ООО Ромашка & Co");
        let query = params.to_query_string();
        assert!(!query.contains(' '));
        assert_eq!(
            QueryParams::parse(&query).get("search"),
            Some("ООО Ромашка & Co")
        );
    }

    #[test]
    fn test_parse_plus_as_space() {
        let params = QueryParams::parse("search=acme+corp");
        assert_eq!(params.get("search"), Some("acme corp"));
    }

    #[test]
    fn test_from_url() {
        let params = QueryParams::from_url("/dashboard?per_page=50&page=3#top");
        assert_eq!(params.get("per_page"), Some("50"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(QueryParams::from_url("/dashboard"), QueryParams::new());
    }
}
