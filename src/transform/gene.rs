use serde::Deserialize;

use crate::entities::GeneInfo;
use crate::error::GeneMcpError;
use crate::transform::{AliasField, OrganismField, resolve_organism};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneSummaryRecord {
    name: String,
    description: String,
    organism: Option<OrganismField>,
    chromosome: Option<String>,
    maplocation: Option<String>,
    geneticsource: Option<String>,
    otheraliases: Option<AliasField>,
    summary: Option<String>,
}

/// Maps a raw `esummary` response (db=gene) into a [`GeneInfo`].
///
/// The record is looked up at `result.<gene_id>`; an absent or null entry
/// is a [`GeneMcpError::NotFound`]. `gene_id` is echoed back as supplied.
pub(crate) fn parse(raw: &serde_json::Value, gene_id: &str) -> Result<GeneInfo, GeneMcpError> {
    let record = raw
        .get("result")
        .and_then(|result| result.get(gene_id))
        .filter(|value| !value.is_null())
        .ok_or_else(|| GeneMcpError::NotFound {
            db: "gene".to_string(),
            id: gene_id.to_string(),
        })?;

    let record: GeneSummaryRecord =
        serde_json::from_value(record.clone()).map_err(|source| GeneMcpError::Protocol {
            endpoint: "esummary".to_string(),
            source,
        })?;

    Ok(GeneInfo {
        gene_id: gene_id.to_string(),
        name: record.name,
        description: record.description,
        organism: resolve_organism(record.organism),
        chromosome: record.chromosome,
        map_location: record.maplocation,
        gene_type: record.geneticsource,
        other_aliases: record.otheraliases.map(AliasField::into_vec).unwrap_or_default(),
        summary: record.summary,
    })
}
