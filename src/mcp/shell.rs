use std::sync::Arc;

use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ServerHandler, ServiceExt, tool};
use tokio_util::sync::CancellationToken;

use crate::bridge::{Bridge, DEFAULT_MAX_RESULTS};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct GeneMcpServer {
    bridge: Arc<Bridge>,
}

impl GeneMcpServer {
    pub fn new(bridge: Bridge) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }
}

#[tool(tool_box)]
impl GeneMcpServer {
    #[tool(
        description = "Search NCBI Entrez for genes. Returns the total hit count, matching gene ids in relevance order, and the translated query. The query accepts Entrez syntax, e.g. 'BRCA1[gene] AND human[organism]'."
    )]
    async fn search_genes(
        &self,
        #[tool(param)] query: String,
        #[tool(param)] max_results: Option<usize>,
    ) -> Result<String, String> {
        let result = self
            .bridge
            .search_genes(&query, max_results.unwrap_or(DEFAULT_MAX_RESULTS))
            .await
            .map_err(|e| format!("Error: {e}"))?;
        to_json(&result)
    }

    #[tool(
        description = "Fetch gene details by NCBI Gene ID (e.g. 672 for BRCA1): symbol, description, organism, chromosome, map location, aliases, and summary."
    )]
    async fn get_gene_info(&self, #[tool(param)] gene_id: String) -> Result<String, String> {
        let gene = self
            .bridge
            .fetch_gene_info(&gene_id)
            .await
            .map_err(|e| format!("Error: {e}"))?;
        to_json(&gene)
    }

    #[tool(
        description = "Fetch protein details by NCBI Protein ID: title, organism, sequence length, and molecule type."
    )]
    async fn get_protein_info(&self, #[tool(param)] protein_id: String) -> Result<String, String> {
        let protein = self
            .bridge
            .fetch_protein_info(&protein_id)
            .await
            .map_err(|e| format!("Error: {e}"))?;
        to_json(&protein)
    }

    #[tool(
        description = "Search genes by symbol (e.g. BRCA1) with an optional organism filter ('human' is accepted for 'Homo sapiens') and resolve each hit to a full gene record. Ids that fail to resolve are listed under 'skipped'."
    )]
    async fn search_by_gene_symbol(
        &self,
        #[tool(param)] symbol: String,
        #[tool(param)] organism: Option<String>,
    ) -> Result<String, String> {
        let matches = self
            .bridge
            .search_by_gene_symbol(&symbol, organism.as_deref())
            .await
            .map_err(|e| format!("Error: {e}"))?;
        to_json(&matches)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error: {e}"))
}

#[tool(tool_box)]
impl ServerHandler for GeneMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "genemcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Gene and protein metadata from NCBI Entrez. Use search_genes for free \
                 queries, search_by_gene_symbol to resolve a symbol to full records, and \
                 get_gene_info/get_protein_info for single ids."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio(config: Config) -> anyhow::Result<()> {
    let bridge = Bridge::new(config)?;

    let shutdown = CancellationToken::new();
    let cancel = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let running = GeneMcpServer::new(bridge)
        .serve_with_ct(rmcp::transport::stdio(), shutdown)
        .await?;
    let _reason = running.waiting().await?;
    Ok(())
}
