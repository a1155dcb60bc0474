use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_llms::{api, catalog, config::LlmsConfig, llms, models::Catalog};

#[derive(Parser)]
#[command(name = "catalog-llms")]
#[command(about = "Serve an event catalog as llms-full.txt for LLM crawlers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Catalog directory to load
        #[arg(short, long, env = "CATALOG_DIR", default_value = ".")]
        catalog: PathBuf,

        /// Config file (defaults to eventcatalog.toml in the catalog)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Write llms-full.txt once and exit
    Render {
        /// Catalog directory to load
        #[arg(short, long, env = "CATALOG_DIR", default_value = ".")]
        catalog: PathBuf,

        /// Config file (defaults to eventcatalog.toml in the catalog)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize tracing with output to stderr (for render) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "catalog_llms=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Render may print the document to stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load(catalog_dir: &Path, config: Option<&Path>) -> anyhow::Result<(Catalog, LlmsConfig)> {
    let config = LlmsConfig::resolve(catalog_dir, config)?;
    tracing::info!(
        "llms.txt enabled: {}, custom docs: {}, on read error: {}",
        config.llms_txt.enabled,
        config.custom_docs.enabled,
        config.on_read_error.as_str()
    );

    let catalog = catalog::load(catalog_dir)
        .with_context(|| format!("Failed to load catalog from {}", catalog_dir.display()))?;

    Ok((catalog, config))
}

async fn serve(
    catalog_dir: &Path,
    config: Option<&Path>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let (catalog, config) = load(catalog_dir, config)?;
    let app = api::create_router(api::AppState::new(catalog, config));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!(
        "Serving http://{}:{}{}",
        host,
        port,
        api::LLMS_FULL_TXT_PATH
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn render(catalog_dir: &Path, config: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let (catalog, config) = load(catalog_dir, config)?;
    llms::write_to(&catalog, &config, output)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Render needs stderr for logging since stdout may carry the document
    let use_stderr = matches!(cli.command, Some(Commands::Render { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve {
            catalog,
            config,
            host,
            port,
        }) => serve(&catalog, config.as_deref(), &host, port).await?,
        Some(Commands::Render {
            catalog,
            config,
            output,
        }) => render(&catalog, config.as_deref(), output.as_deref())?,
        None => {
            // Default: serve CATALOG_DIR, or the current directory
            let catalog = std::env::var_os("CATALOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            serve(&catalog, None, "127.0.0.1", 3000).await?
        }
    }

    Ok(())
}
