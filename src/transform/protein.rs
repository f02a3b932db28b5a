use serde::Deserialize;

use crate::entities::ProteinInfo;
use crate::error::GeneMcpError;
use crate::transform::{OrganismField, UintField};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProteinSummaryRecord {
    title: String,
    organism: Option<OrganismField>,
    slen: Option<UintField>,
    moltype: Option<String>,
}

/// Maps a raw `esummary` response (db=protein) into a [`ProteinInfo`].
pub(crate) fn parse(
    raw: &serde_json::Value,
    protein_id: &str,
) -> Result<ProteinInfo, GeneMcpError> {
    let record = raw
        .get("result")
        .and_then(|result| result.get(protein_id))
        .filter(|value| !value.is_null())
        .ok_or_else(|| GeneMcpError::NotFound {
            db: "protein".to_string(),
            id: protein_id.to_string(),
        })?;

    let record: ProteinSummaryRecord =
        serde_json::from_value(record.clone()).map_err(|source| GeneMcpError::Protocol {
            endpoint: "esummary".to_string(),
            source,
        })?;

    Ok(ProteinInfo {
        protein_id: protein_id.to_string(),
        title: record.title,
        // Protein summaries normally carry a plain string here; the
        // decoder still tolerates the object shape the gene path sees.
        organism: record.organism.map(OrganismField::resolve).unwrap_or_default(),
        length: record.slen.as_ref().and_then(UintField::parsed),
        mol_type: record.moltype,
    })
}
