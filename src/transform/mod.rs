//! Normalizers mapping raw E-utilities JSON into the bridge entities.
//!
//! Entrez is not shape-stable: counts arrive as strings or integers,
//! organisms as objects or bare strings, aliases as comma-joined strings
//! or arrays. Each variant field gets one small untagged decoder here so
//! the bridge stays free of defensive branching.

use serde::Deserialize;

pub(crate) mod gene;
pub(crate) mod protein;
pub(crate) mod search;

/// A non-negative integer that upstream may send as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum UintField {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for UintField {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl UintField {
    /// Lenient read: absent or unparsable values collapse to 0.
    pub(crate) fn or_zero(&self) -> u64 {
        self.parsed().unwrap_or(0)
    }

    pub(crate) fn parsed(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }
}

/// Organism field: structured object, bare string, or anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OrganismField {
    Name(String),
    Structured {
        #[serde(default)]
        scientificname: Option<String>,
    },
    Other(serde_json::Value),
}

impl OrganismField {
    /// Resolves to a display name, falling back to `"Unknown"`.
    pub(crate) fn resolve(self) -> String {
        match self {
            Self::Name(name) => name,
            Self::Structured { scientificname } => scientificname
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            Self::Other(serde_json::Value::Null) => "Unknown".to_string(),
            Self::Other(value) => value.to_string(),
        }
    }
}

pub(crate) fn resolve_organism(field: Option<OrganismField>) -> String {
    field.map_or_else(|| "Unknown".to_string(), OrganismField::resolve)
}

/// Alias field: comma-joined string or an already-split array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AliasField {
    Joined(String),
    Listed(Vec<String>),
    Other(serde_json::Value),
}

impl AliasField {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            Self::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Listed(aliases) => aliases,
            Self::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn uint(value: serde_json::Value) -> UintField {
        serde_json::from_value(value).expect("decode")
    }

    #[test]
    fn uint_field_accepts_numbers_and_numeric_strings() {
        assert_eq!(uint(json!(42)).or_zero(), 42);
        assert_eq!(uint(json!("42")).or_zero(), 42);
        assert_eq!(uint(json!(" 7 ")).or_zero(), 7);
    }

    #[test]
    fn uint_field_collapses_junk_to_zero() {
        assert_eq!(uint(json!("not-a-number")).or_zero(), 0);
        assert_eq!(uint(json!(null)).or_zero(), 0);
        assert_eq!(uint(json!(-3)).or_zero(), 0);
        assert_eq!(UintField::default().or_zero(), 0);
    }

    #[test]
    fn uint_field_parsed_distinguishes_absent_from_zero() {
        assert_eq!(uint(json!("1863")).parsed(), Some(1863));
        assert_eq!(uint(json!({})).parsed(), None);
    }

    fn organism(value: serde_json::Value) -> String {
        serde_json::from_value::<OrganismField>(value)
            .expect("decode")
            .resolve()
    }

    #[test]
    fn organism_object_resolves_scientific_name() {
        assert_eq!(
            organism(json!({"scientificname": "Homo sapiens", "taxid": 9606})),
            "Homo sapiens"
        );
    }

    #[test]
    fn organism_bare_string_passes_through() {
        assert_eq!(organism(json!("Homo sapiens")), "Homo sapiens");
    }

    #[test]
    fn organism_object_without_name_is_unknown() {
        assert_eq!(organism(json!({"taxid": 9606})), "Unknown");
        assert_eq!(organism(json!({"scientificname": "  "})), "Unknown");
    }

    #[test]
    fn organism_absent_is_unknown_and_other_shapes_stringify() {
        assert_eq!(resolve_organism(None), "Unknown");
        assert_eq!(organism(json!(null)), "Unknown");
        assert_eq!(organism(json!(9606)), "9606");
    }

    fn aliases(value: serde_json::Value) -> Vec<String> {
        serde_json::from_value::<AliasField>(value)
            .expect("decode")
            .into_vec()
    }

    #[test]
    fn comma_joined_aliases_split_and_trim() {
        assert_eq!(
            aliases(json!("TP53, p53, TRP53")),
            vec!["TP53", "p53", "TRP53"]
        );
    }

    #[test]
    fn alias_array_passes_through_unchanged() {
        assert_eq!(aliases(json!(["TP53", "p53"])), vec!["TP53", "p53"]);
    }

    #[test]
    fn empty_or_junk_aliases_become_empty_sequence() {
        assert_eq!(aliases(json!("")), Vec::<String>::new());
        assert_eq!(aliases(json!(" , ")), Vec::<String>::new());
        assert_eq!(aliases(json!(42)), Vec::<String>::new());
    }
}
