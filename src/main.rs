use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use azdo_mcp::{config::AzdoConfig, mcp};

#[derive(Parser)]
#[command(name = "azdo-mcp")]
#[command(about = "Azure DevOps MCP server for work tracking, boards, repos, and delivery insights")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server via stdio (for MCP client integration)
    Serve,
    /// Validate configuration resolution and exit
    Check,
}

/// Initialize tracing to stderr so stdout stays clean for the protocol.
/// Silent unless RUST_LOG is set or ENABLE_LOGS=true.
fn init_tracing() {
    let enable_logs = std::env::var("ENABLE_LOGS").map(|v| v == "true").unwrap_or(false);
    let default_filter = if enable_logs { "azdo_mcp=debug" } else { "off" };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Some(Commands::Check) => {
            let config = AzdoConfig::from_env()?;
            println!("Organization: {}", config.org_url);
            println!("Project:      {}", config.project);
            println!("Token:        set ({} chars)", config.pat.len());
        }
        Some(Commands::Serve) | None => {
            let config = AzdoConfig::from_env()?;
            mcp::run_stdio_server(config).await?;
        }
    }

    Ok(())
}
