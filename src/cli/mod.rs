//! Command-line surface: argument parsing and command execution.
//!
//! This layer only translates arguments into bridge calls and renders the
//! returned entities; it contains no Entrez-specific parsing.

use clap::{Parser, Subcommand};

use crate::bridge::{Bridge, DEFAULT_MAX_RESULTS};
use crate::config::Config;
use crate::render;

#[derive(Debug, Parser)]
#[command(
    name = "genemcp",
    version,
    about = "Gene and protein metadata from NCBI Entrez — CLI, web API, and MCP server"
)]
pub struct Cli {
    /// Contact email, recommended by NCBI for API usage.
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// NCBI API key; raises the request budget from 3/s to 10/s.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Print results as pretty JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the gene database
    Search {
        /// Search query (gene name, symbol, Entrez query syntax)
        query: String,

        /// Maximum number of ids to return
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,
    },

    /// Fetch gene details by NCBI Gene ID (e.g. 672 for BRCA1)
    Gene { gene_id: String },

    /// Fetch protein details by NCBI Protein ID
    Protein { protein_id: String },

    /// Search genes by symbol with an optional organism filter
    Symbol {
        /// Gene symbol (e.g. BRCA1, TP53)
        symbol: String,

        /// Organism filter (e.g. human, "Mus musculus")
        #[arg(long)]
        organism: Option<String>,
    },

    /// Run the MCP server over stdio
    Mcp,

    /// Run the web front-end (JSON API and HTML pages)
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

/// Executes a data subcommand and returns its rendered output.
///
/// # Errors
///
/// Propagates configuration and bridge errors; the binary maps them to a
/// non-zero exit.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::from_env_with_overrides(cli.email, cli.api_key)?;
    let bridge = Bridge::new(config)?;

    let output = match cli.command {
        Commands::Search { query, limit } => {
            let result = bridge.search_genes(&query, limit).await?;
            if cli.json {
                render::json::to_pretty(&result)?
            } else {
                render::text::search_result(&query, &result)
            }
        }
        Commands::Gene { gene_id } => {
            let gene = bridge.fetch_gene_info(&gene_id).await?;
            if cli.json {
                render::json::to_pretty(&gene)?
            } else {
                render::text::gene(&gene)
            }
        }
        Commands::Protein { protein_id } => {
            let protein = bridge.fetch_protein_info(&protein_id).await?;
            if cli.json {
                render::json::to_pretty(&protein)?
            } else {
                render::text::protein(&protein)
            }
        }
        Commands::Symbol { symbol, organism } => {
            let matches = bridge
                .search_by_gene_symbol(&symbol, organism.as_deref())
                .await?;
            if cli.json {
                render::json::to_pretty(&matches)?
            } else {
                render::text::symbol_matches(&symbol, organism.as_deref(), &matches)
            }
        }
        Commands::Mcp | Commands::Serve { .. } => {
            anyhow::bail!("server commands are dispatched by the binary entrypoint")
        }
    };

    Ok(output)
}
