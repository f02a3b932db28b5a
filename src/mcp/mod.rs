//! MCP server entrypoint exposing the bridge operations as tools.

mod shell;

use crate::config::Config;

/// Runs the MCP server over stdio with the given configuration.
///
/// # Errors
///
/// Returns an error when stdio transport setup or MCP server startup
/// fails.
pub async fn run_stdio(config: Config) -> anyhow::Result<()> {
    shell::run_stdio(config).await
}
