use serde::Serialize;

use crate::error::GeneMcpError;

pub(crate) fn to_pretty<T: Serialize>(value: &T) -> Result<String, GeneMcpError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::to_pretty;
    use crate::entities::ProteinInfo;

    #[test]
    fn to_pretty_serializes_entities_with_indentation() {
        let protein = ProteinInfo {
            protein_id: "1732746".to_string(),
            title: "breast cancer type 1 susceptibility protein".to_string(),
            organism: "Homo sapiens".to_string(),
            length: Some(1863),
            mol_type: Some("aa".to_string()),
        };

        let json = to_pretty(&protein).expect("json");
        assert!(json.contains('\n'));
        assert!(json.contains("\"protein_id\": \"1732746\""));
        assert!(json.contains("\"length\": 1863"));
    }
}
