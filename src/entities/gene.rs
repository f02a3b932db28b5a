use serde::{Deserialize, Serialize};

/// Gene metadata from an Entrez `esummary` record.
///
/// `gene_id` echoes the caller-supplied identifier; it is not validated
/// against the fetched record. `other_aliases` is always a sequence,
/// empty when the record carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneInfo {
    pub gene_id: String,
    pub name: String,
    pub description: String,
    pub organism: String,
    pub chromosome: Option<String>,
    pub map_location: Option<String>,
    pub gene_type: Option<String>,
    pub other_aliases: Vec<String>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::GeneInfo;

    pub(crate) fn brca1() -> GeneInfo {
        GeneInfo {
            gene_id: "672".to_string(),
            name: "BRCA1".to_string(),
            description: "BRCA1 DNA repair associated".to_string(),
            organism: "Homo sapiens".to_string(),
            chromosome: Some("17".to_string()),
            map_location: Some("17q21.31".to_string()),
            gene_type: Some("genomic".to_string()),
            other_aliases: vec!["IRIS".to_string(), "PSCP".to_string()],
            summary: Some("This gene encodes a tumor suppressor.".to_string()),
        }
    }

    #[test]
    fn wire_round_trip_preserves_all_fields() {
        let gene = brca1();
        let wire = serde_json::to_string(&gene).expect("serialize");
        let decoded: GeneInfo = serde_json::from_str(&wire).expect("deserialize");
        assert_eq!(decoded, gene);
    }

    #[test]
    fn empty_aliases_serialize_as_empty_array() {
        let gene = GeneInfo {
            other_aliases: Vec::new(),
            ..brca1()
        };
        let wire = serde_json::to_value(&gene).expect("serialize");
        assert_eq!(wire["other_aliases"], serde_json::json!([]));
    }
}
