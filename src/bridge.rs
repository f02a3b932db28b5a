//! The bridge: composes the rate-limited gateway and the normalizers into
//! the four public operations shared by every front-end.

use crate::config::Config;
use crate::entities::{GeneInfo, ProteinInfo, SearchResult, SymbolMatches};
use crate::error::GeneMcpError;
use crate::sources::entrez::{Endpoint, EntrezClient};
use crate::transform;

/// Default `retmax` for [`Bridge::search_genes`].
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Upper bound on per-id fetches in a symbol search. Keeps a single call
/// from issuing an unbounded series of rate-limited requests.
const SYMBOL_FETCH_CAP: usize = 10;

/// Stateless orchestrator over the Entrez E-utilities.
///
/// Every call is a self-contained request/response cycle; the only state
/// shared across calls is the gateway's rate-limiter clock.
#[derive(Debug, Clone)]
pub struct Bridge {
    client: EntrezClient,
}

impl Bridge {
    /// # Errors
    ///
    /// Returns [`GeneMcpError::HttpClientInit`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: Config) -> Result<Self, GeneMcpError> {
        Ok(Self {
            client: EntrezClient::new(config)?,
        })
    }

    /// Searches the gene database, returning ids in upstream relevance order.
    ///
    /// # Errors
    ///
    /// [`GeneMcpError::InvalidArgument`] for a blank query or a zero
    /// `max_results`; upstream failures propagate unmodified.
    pub async fn search_genes(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<SearchResult, GeneMcpError> {
        let query = non_blank("query", query)?;
        if max_results == 0 {
            return Err(GeneMcpError::InvalidArgument(
                "max_results must be greater than zero".to_string(),
            ));
        }

        let retmax = max_results.to_string();
        let raw = self
            .client
            .request(
                Endpoint::Search,
                "gene",
                &[("term", query), ("retmax", &retmax)],
            )
            .await?;
        Ok(transform::search::parse(raw))
    }

    /// Fetches the summary record for one gene id.
    ///
    /// # Errors
    ///
    /// [`GeneMcpError::NotFound`] when the id is absent from the keyed
    /// result set; [`GeneMcpError::InvalidArgument`] for a blank id.
    pub async fn fetch_gene_info(&self, gene_id: &str) -> Result<GeneInfo, GeneMcpError> {
        let gene_id = non_blank("gene_id", gene_id)?;
        let raw = self
            .client
            .request(Endpoint::Summary, "gene", &[("id", gene_id)])
            .await?;
        transform::gene::parse(&raw, gene_id)
    }

    /// Fetches the summary record for one protein id.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Bridge::fetch_gene_info`].
    pub async fn fetch_protein_info(&self, protein_id: &str) -> Result<ProteinInfo, GeneMcpError> {
        let protein_id = non_blank("protein_id", protein_id)?;
        let raw = self
            .client
            .request(Endpoint::Summary, "protein", &[("id", protein_id)])
            .await?;
        transform::protein::parse(&raw, protein_id)
    }

    /// Searches by gene symbol and resolves each hit to a full record.
    ///
    /// Query policy: `{symbol}[gene]`, with ` AND {organism}[organism]`
    /// appended when an organism is given (`human` canonicalizes to
    /// `Homo sapiens`). The search is capped at ten ids and each id is
    /// fetched sequentially. This is a best-effort aggregation: an id
    /// whose fetch fails is recorded in [`SymbolMatches::skipped`] and the
    /// loop continues. Only a failure of the initial search fails the call.
    ///
    /// # Errors
    ///
    /// [`GeneMcpError::InvalidArgument`] for a blank symbol; errors from
    /// the initial search propagate unmodified.
    pub async fn search_by_gene_symbol(
        &self,
        symbol: &str,
        organism: Option<&str>,
    ) -> Result<SymbolMatches, GeneMcpError> {
        let symbol = non_blank("symbol", symbol)?;
        let query = symbol_query(symbol, organism);
        let search = self.search_genes(&query, SYMBOL_FETCH_CAP).await?;

        let mut genes = Vec::new();
        let mut skipped = Vec::new();
        for gene_id in search.ids.iter().take(SYMBOL_FETCH_CAP) {
            match self.fetch_gene_info(gene_id).await {
                Ok(gene) => genes.push(gene),
                Err(err) => {
                    tracing::debug!(gene_id, error = %err, "skipping unresolvable gene id");
                    skipped.push(gene_id.clone());
                }
            }
        }

        Ok(SymbolMatches { genes, skipped })
    }
}

fn symbol_query(symbol: &str, organism: Option<&str>) -> String {
    match organism.map(str::trim).filter(|s| !s.is_empty()) {
        Some(organism) => format!(
            "{symbol}[gene] AND {}[organism]",
            canonical_organism(organism)
        ),
        None => format!("{symbol}[gene]"),
    }
}

fn canonical_organism(organism: &str) -> &str {
    if organism.eq_ignore_ascii_case("human") {
        "Homo sapiens"
    } else {
        organism
    }
}

fn non_blank<'a>(name: &str, value: &'a str) -> Result<&'a str, GeneMcpError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GeneMcpError::InvalidArgument(format!(
            "{name} must not be blank"
        )));
    }
    Ok(trimmed)
}
