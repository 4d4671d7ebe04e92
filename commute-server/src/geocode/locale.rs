//! Query normalisation and country biasing.
//!
//! Free-text place names are ambiguous across countries ("Punjab" exists on
//! both sides of a border, "Delhi" exists in several US states). A
//! [`LocaleBiasPolicy`] maps recognisable substrings to a country code that
//! is passed to the geocoder to narrow its search.

/// Spelling corrections applied before lookup, as (whole word, replacement).
const PLACE_ALIASES: &[(&str, &str)] = &[("mahabalipuram", "Mamallapuram")];

/// Indian states, union territories and major cities.
const INDIA_KEYWORDS: &[&str] = &[
    "andhra",
    "arunachal",
    "assam",
    "bihar",
    "chhattisgarh",
    "goa",
    "gujarat",
    "haryana",
    "himachal",
    "jharkhand",
    "karnataka",
    "kerala",
    "madhya pradesh",
    "maharashtra",
    "manipur",
    "meghalaya",
    "mizoram",
    "nagaland",
    "odisha",
    "punjab",
    "rajasthan",
    "sikkim",
    "tamil nadu",
    "telangana",
    "tripura",
    "uttar",
    "uttarakhand",
    "west bengal",
    "delhi",
    "pondicherry",
    "puducherry",
    "chennai",
    "mumbai",
    "kolkata",
    "bengaluru",
    "hyderabad",
];

/// Trim a query and apply known spelling corrections.
pub fn normalize_place(query: &str) -> String {
    PLACE_ALIASES
        .iter()
        .fold(query.trim().to_string(), |acc, (word, replacement)| {
            replace_word_ignore_case(&acc, word, replacement)
        })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Replace the first whole-word, ASCII-case-insensitive occurrence of `word`.
fn replace_word_ignore_case(text: &str, word: &str, replacement: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let needle = word.to_ascii_lowercase();
    let bytes = text.as_bytes();

    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find(&needle) {
        let start = search_from + found;
        let end = start + needle.len();
        let bounded_before = start == 0 || !is_word_byte(bytes[start - 1]);
        let bounded_after = end == bytes.len() || !is_word_byte(bytes[end]);

        if bounded_before && bounded_after {
            return format!("{}{}{}", &text[..start], replacement, &text[end..]);
        }
        search_from = start + 1;
    }

    text.to_string()
}

/// One country's biasing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBias {
    /// ISO 3166-1 alpha-2 code sent as `countrycodes`.
    pub country_code: String,
    /// Lowercase substrings that mark a query as belonging to the country.
    /// The country's own name should be one of them.
    pub keywords: Vec<String>,
}

impl LocaleBias {
    pub fn new<I, S>(country_code: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            country_code: country_code.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, lower_query: &str) -> bool {
        self.keywords.iter().any(|k| lower_query.contains(k.as_str()))
    }
}

/// Ordered set of [`LocaleBias`] rules; the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBiasPolicy {
    biases: Vec<LocaleBias>,
}

impl LocaleBiasPolicy {
    /// A policy that never biases.
    pub fn none() -> Self {
        Self::default()
    }

    /// The stock policy: Indian states and cities bias to `in`.
    pub fn india() -> Self {
        let keywords = std::iter::once("india").chain(INDIA_KEYWORDS.iter().copied());
        Self::none().with_bias(LocaleBias::new("in", keywords))
    }

    /// Append a rule, checked after the existing ones.
    pub fn with_bias(mut self, bias: LocaleBias) -> Self {
        self.biases.push(bias);
        self
    }

    /// Country code to restrict the lookup to, if any rule matches.
    pub fn country_for(&self, query: &str) -> Option<&str> {
        let lower = query.to_lowercase();
        self.biases
            .iter()
            .find(|b| b.matches(&lower))
            .map(|b| b.country_code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_place("  Indiranagar \n"), "Indiranagar");
    }

    #[test]
    fn normalize_applies_alias_case_insensitively() {
        assert_eq!(normalize_place("MAHABALIPURAM"), "Mamallapuram");
        assert_eq!(
            normalize_place("Mahabalipuram beach, Tamil Nadu"),
            "Mamallapuram beach, Tamil Nadu"
        );
    }

    #[test]
    fn normalize_respects_word_boundaries() {
        assert_eq!(normalize_place("mahabalipurams"), "mahabalipurams");
        assert_eq!(normalize_place("xmahabalipuram"), "xmahabalipuram");
        assert_eq!(normalize_place("old-mahabalipuram"), "old-Mamallapuram");
    }

    #[test]
    fn normalize_replaces_first_match_only() {
        assert_eq!(
            normalize_place("Mahabalipuram via mahabalipuram"),
            "Mamallapuram via mahabalipuram"
        );
        // an embedded occurrence does not count as the first match
        assert_eq!(
            normalize_place("xmahabalipuram, Mahabalipuram, mahabalipuram"),
            "xmahabalipuram, Mamallapuram, mahabalipuram"
        );
    }

    #[test]
    fn normalize_leaves_non_ascii_intact() {
        assert_eq!(normalize_place("Zürich"), "Zürich");
        assert_eq!(normalize_place("é mahabalipuram"), "é Mamallapuram");
    }

    #[test]
    fn india_policy_matches_states_and_cities() {
        let policy = LocaleBiasPolicy::india();
        assert_eq!(policy.country_for("Koramangala, Bengaluru"), Some("in"));
        assert_eq!(policy.country_for("Port Blair, INDIA"), Some("in"));
        assert_eq!(policy.country_for("Ooty, Tamil Nadu"), Some("in"));
    }

    #[test]
    fn india_policy_ignores_other_places() {
        let policy = LocaleBiasPolicy::india();
        assert_eq!(policy.country_for("Paris"), None);
        assert_eq!(policy.country_for("Electronic City"), None);
        // Neighbourhood names alone carry no state or city keyword
        assert_eq!(policy.country_for("Indiranagar"), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = LocaleBiasPolicy::none()
            .with_bias(LocaleBias::new("fr", ["france", "paris"]))
            .with_bias(LocaleBias::new("us", ["paris", "texas"]));
        assert_eq!(policy.country_for("Paris, Texas"), Some("fr"));
        assert_eq!(policy.country_for("Austin, Texas"), Some("us"));
    }

    #[test]
    fn keywords_are_lowercased() {
        let bias = LocaleBias::new("de", ["Bayern"]);
        assert_eq!(bias.keywords, vec!["bayern".to_string()]);
        let policy = LocaleBiasPolicy::none().with_bias(bias);
        assert_eq!(policy.country_for("München, BAYERN"), Some("de"));
    }

    #[test]
    fn empty_policy_never_biases() {
        let policy = LocaleBiasPolicy::none();
        assert!(policy.is_empty());
        assert_eq!(policy.country_for("Mumbai"), None);
    }
}
