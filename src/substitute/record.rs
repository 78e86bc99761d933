//! Type records: ordered placeholder → replacement rules

use super::placeholder::{Placeholder, PlaceholderError};

/// One instantiation of a generic template
///
/// Pairs are kept in declaration order. Application is sequential: the output
/// of pair `i` is the input of pair `i + 1`, so a replacement that contains a
/// later pair's token gets rewritten again by that pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRecord {
    pairs: Vec<(Placeholder, String)>,
}

impl TypeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `(key, replacement)` pairs, preserving their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, PlaceholderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| Ok((Placeholder::new(k)?, v.into())))
            .collect::<Result<Vec<_>, PlaceholderError>>()?;
        Ok(Self { pairs })
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the record has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in application order
    pub fn iter(&self) -> impl Iterator<Item = (&Placeholder, &str)> {
        self.pairs.iter().map(|(p, v)| (p, v.as_str()))
    }

    /// Replacement configured for a bare key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(p, _)| p.key() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Short human-readable tag for logs, e.g. `t=d`
    pub fn label(&self) -> String {
        match self.pairs.first() {
            Some((p, v)) => format!("{}={}", p.key(), v),
            None => "<empty>".to_string(),
        }
    }

    /// Apply every pair to `text` in order
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (placeholder, replacement) in &self.pairs {
            if placeholder.is_match(&out) {
                out = placeholder.replace_all(&out, replacement);
            }
        }
        out
    }
}

/// Apply a record to a piece of text
pub fn apply_record(text: &str, record: &TypeRecord) -> String {
    record.apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(pairs: &[(&str, &str)]) -> TypeRecord {
        TypeRecord::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_identity_on_plain_text() {
        let r = record(&[("TYPE", "int"), ("SUFFIX", "i")]);
        let text = "int main(void) { return 0; } // TYPE SUFFIX @ @@";
        assert_eq!(apply_record(text, &r), text);
    }

    #[test]
    fn test_sequential_rewrite() {
        let r = record(&[("A", "x@B@"), ("B", "y")]);
        assert_eq!(apply_record("@A@", &r), "xy");
    }

    #[test]
    fn test_earlier_pair_does_not_see_later_output() {
        let r = record(&[("B", "y"), ("A", "x@B@")]);
        assert_eq!(apply_record("@A@", &r), "x@B@");
    }

    #[test]
    fn test_no_match_is_noop() {
        let r = record(&[("A", "1")]);
        assert_eq!(apply_record("@B@", &r), "@B@");
    }

    #[test]
    fn test_deterministic() {
        let r = record(&[("t", "d"), ("type", "gdouble")]);
        let text = "typedef @type@ (*AranCoefficientBuffer@t@Generator) (guint n);";
        let first = apply_record(text, &r);
        assert_eq!(
            first,
            "typedef gdouble (*AranCoefficientBufferdGenerator) (guint n);"
        );
        for _ in 0..5 {
            assert_eq!(apply_record(text, &r), first);
        }
    }

    #[test]
    fn test_empty_record() {
        let r = TypeRecord::new();
        assert!(r.is_empty());
        assert_eq!(r.label(), "<empty>");
        assert_eq!(r.apply("@x@"), "@x@");
    }

    #[test]
    fn test_accessors() {
        let r = record(&[("TYPE", "float"), ("SUFFIX", "f")]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("SUFFIX"), Some("f"));
        assert_eq!(r.get("@SUFFIX@"), None);
        assert_eq!(r.label(), "TYPE=float");
        let tokens: Vec<&str> = r.iter().map(|(p, _)| p.token()).collect();
        assert_eq!(tokens, vec!["@TYPE@", "@SUFFIX@"]);
    }

    #[test]
    fn test_from_pairs_rejects_bad_key() {
        let err = TypeRecord::from_pairs([("ok", "1"), ("", "2")]).unwrap_err();
        assert_eq!(err, PlaceholderError::Empty);
    }
}
