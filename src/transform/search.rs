use serde::Deserialize;

use crate::entities::SearchResult;
use crate::transform::UintField;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EsearchEnvelope {
    esearchresult: EsearchPayload,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EsearchPayload {
    count: UintField,
    idlist: Vec<String>,
    querytranslation: Option<String>,
}

/// Maps a raw `esearch` response into a [`SearchResult`].
///
/// Missing or malformed sections degrade to an empty result rather than
/// failing: a count that does not parse becomes 0 and an absent id list
/// becomes an empty sequence.
pub(crate) fn parse(raw: serde_json::Value) -> SearchResult {
    let envelope: EsearchEnvelope = serde_json::from_value(raw).unwrap_or_default();
    SearchResult {
        total_count: envelope.esearchresult.count.or_zero(),
        ids: envelope.esearchresult.idlist,
        query_translation: envelope.esearchresult.querytranslation,
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use serde_json::json;

    #[test]
    fn parses_a_typical_esearch_response() {
        let result = parse(json!({
            "header": {"type": "esearch", "version": "0.3"},
            "esearchresult": {
                "count": "2",
                "retmax": "2",
                "idlist": ["672", "675"],
                "querytranslation": "BRCA1[gene] AND \"Homo sapiens\"[organism]"
            }
        }));

        assert_eq!(result.total_count, 2);
        assert_eq!(result.ids, vec!["672", "675"]);
        assert_eq!(
            result.query_translation.as_deref(),
            Some("BRCA1[gene] AND \"Homo sapiens\"[organism]")
        );
    }

    #[test]
    fn preserves_upstream_id_order() {
        let result = parse(json!({
            "esearchresult": {"count": 3, "idlist": ["7157", "672", "348"]}
        }));
        assert_eq!(result.ids, vec!["7157", "672", "348"]);
    }

    #[test]
    fn missing_fields_default_to_an_empty_result() {
        let result = parse(json!({}));
        assert_eq!(result.total_count, 0);
        assert!(result.ids.is_empty());
        assert_eq!(result.query_translation, None);
    }

    #[test]
    fn unparsable_count_defaults_to_zero() {
        let result = parse(json!({
            "esearchresult": {"count": "many", "idlist": ["1"]}
        }));
        assert_eq!(result.total_count, 0);
        assert_eq!(result.ids, vec!["1"]);
    }

    #[test]
    fn integer_count_is_accepted() {
        let result = parse(json!({"esearchresult": {"count": 17}}));
        assert_eq!(result.total_count, 17);
    }
}
