use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();

    let cli = genemcp_cli::cli::Cli::parse();
    match cli.command {
        genemcp_cli::cli::Commands::Mcp => {
            let run = async {
                let config = genemcp_cli::config::Config::from_env_with_overrides(
                    cli.email,
                    cli.api_key,
                )?;
                genemcp_cli::mcp::run_stdio(config).await
            };
            match run.await {
                Ok(()) => std::process::ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::ExitCode::from(1)
                }
            }
        }
        genemcp_cli::cli::Commands::Serve { host, port } => {
            let run = async {
                let config = genemcp_cli::config::Config::from_env_with_overrides(
                    cli.email,
                    cli.api_key,
                )?;
                genemcp_cli::web::serve(config, &host, port).await
            };
            match run.await {
                Ok(()) => std::process::ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::ExitCode::from(1)
                }
            }
        }
        _ => match genemcp_cli::cli::run(cli).await {
            Ok(output) => {
                println!("{output}");
                std::process::ExitCode::SUCCESS
            }
            Err(err) => {
                if let Some(gene_err) = err.downcast_ref::<genemcp_cli::error::GeneMcpError>() {
                    eprintln!("Error: {gene_err}");
                } else {
                    eprintln!("Error: {err}");
                }
                std::process::ExitCode::from(1)
            }
        },
    }
}
