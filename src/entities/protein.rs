use serde::{Deserialize, Serialize};

/// Protein metadata from an Entrez `esummary` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinInfo {
    pub protein_id: String,
    pub title: String,
    pub organism: String,
    pub length: Option<u64>,
    pub mol_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ProteinInfo;

    #[test]
    fn wire_round_trip_preserves_all_fields() {
        let protein = ProteinInfo {
            protein_id: "NP_009225".to_string(),
            title: "breast cancer type 1 susceptibility protein".to_string(),
            organism: "Homo sapiens".to_string(),
            length: Some(1863),
            mol_type: Some("aa".to_string()),
        };

        let wire = serde_json::to_string(&protein).expect("serialize");
        let decoded: ProteinInfo = serde_json::from_str(&wire).expect("deserialize");
        assert_eq!(decoded, protein);
    }
}
