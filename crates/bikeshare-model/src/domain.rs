//! Answer domains for interactive prompts.
//!
//! A [`Domain`] describes every answer a single prompt accepts. Matching is
//! case-insensitive: lookup keys and enumeration members are stored in their
//! normalized (trimmed, lowercase) form and user input is normalized the same
//! way before comparison.

use std::collections::BTreeMap;

/// Accepted answers for one validation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// Alias to canonical value mapping (cities, filter kinds, yes/no).
    Lookup(BTreeMap<String, String>),
    /// Literal values; the answer is the matched token, capitalized.
    Enumeration(Vec<String>),
}

impl Domain {
    /// Build a lookup domain from `(alias, canonical)` pairs.
    ///
    /// Aliases are normalized so every key is reachable in lowercase form.
    pub fn lookup<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(alias, value)| (normalize(alias.as_ref()), value.into()))
            .collect();
        Self::Lookup(map)
    }

    /// Build an enumeration domain from any displayable values.
    ///
    /// Numeric values are compared through their decimal string form.
    pub fn enumeration<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let mut members: Vec<String> = Vec::new();
        for value in values {
            let member = normalize(&value.to_string());
            if !members.contains(&member) {
                members.push(member);
            }
        }
        Self::Enumeration(members)
    }

    /// Returns true if the raw input matches a member after normalization.
    pub fn contains(&self, raw: &str) -> bool {
        let key = normalize(raw);
        match self {
            Self::Lookup(map) => map.contains_key(&key),
            Self::Enumeration(members) => members.contains(&key),
        }
    }

    /// Resolve raw input to the value this domain returns for it.
    ///
    /// Lookups yield the canonical value of the matched alias; enumerations
    /// yield the normalized token with its first character upper-cased.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let key = normalize(raw);
        match self {
            Self::Lookup(map) => map.get(&key).cloned(),
            Self::Enumeration(members) => members
                .contains(&key)
                .then(|| capitalize_first(&key)),
        }
    }

    /// Number of accepted (normalized) answers.
    pub fn len(&self) -> usize {
        match self {
            Self::Lookup(map) => map.len(),
            Self::Enumeration(members) => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canonical answer of [`yes_no_domain`] for an affirmative reply.
pub const YES: &str = "yes";
/// Canonical answer of [`yes_no_domain`] for a negative reply.
pub const NO: &str = "no";

/// `y`/`yes` map to [`YES`], `n`/`no` map to [`NO`].
pub fn yes_no_domain() -> Domain {
    Domain::lookup([("y", YES), ("yes", YES), ("n", NO), ("no", NO)])
}

/// Upper-case the first character and keep the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_keys_are_case_insensitive() {
        let domain = Domain::lookup([("Chicago", "chicago.csv"), ("C", "chicago.csv")]);
        assert_eq!(domain.resolve("CHICAGO"), Some("chicago.csv".to_string()));
        assert_eq!(domain.resolve("c"), Some("chicago.csv".to_string()));
        assert_eq!(domain.resolve("chi"), None);
    }

    #[test]
    fn enumeration_returns_capitalized_token() {
        let domain = Domain::enumeration(["Subscriber", "Customer"]);
        assert_eq!(domain.resolve("sUBSCRIBER"), Some("Subscriber".to_string()));
        assert_eq!(domain.resolve("dependent"), None);
    }

    #[test]
    fn numeric_enumeration_compares_decimal_strings() {
        let domain = Domain::enumeration([1, 3, 5]);
        assert!(domain.contains("3"));
        assert!(!domain.contains("2"));
        assert!(!domain.contains("[1, 3, 5]"));
        assert_eq!(domain.resolve(" 5 "), Some("5".to_string()));
    }

    #[test]
    fn enumeration_deduplicates_case_variants() {
        let domain = Domain::enumeration(["Male", "male", "Female"]);
        assert_eq!(domain.len(), 2);
        assert_eq!(domain.resolve("MALE").as_deref(), Some("Male"));
    }

    #[test]
    fn yes_no_aliases() {
        let domain = yes_no_domain();
        assert_eq!(domain.resolve("Y").as_deref(), Some(YES));
        assert_eq!(domain.resolve("No").as_deref(), Some(NO));
        assert!(!domain.contains("maybe"));
    }

    #[test]
    fn capitalize_first_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("émile"), "Émile");
        assert_eq!(capitalize_first("user type"), "User type");
    }
}
