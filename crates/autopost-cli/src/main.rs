mod catalog;
mod generate;
mod source;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "autopost")]
#[command(about = "Generate scheduled Instagram post batches from a product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a batch of posts from the top-ranked products
    Generate(GenerateArgs),
    /// Show the catalog in ranking order with stock levels
    Catalog {
        /// Selection strategy id (unknown ids fall back to high-stock)
        #[arg(long, default_value = "high-stock")]
        strategy: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the available post templates
    Templates,
    /// Show the active brand profile
    Brand {
        /// Theme preset to show instead of the configured brand (nova, neon)
        #[arg(long)]
        theme: Option<String>,
    },
}

/// Where products come from. Defaults to the configured catalog file, or the
/// configured storefront when one is set.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SourceArgs {
    /// Use the built-in demo catalog
    #[arg(long)]
    pub(crate) sample: bool,
    /// Read products from this storefront's products.json
    #[arg(long, conflicts_with = "sample")]
    pub(crate) shop_url: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArgs {
    /// Selection strategy id (unknown ids fall back to high-stock)
    #[arg(long, default_value = "high-stock")]
    pub(crate) strategy: String,
    /// Caption style: engaging, minimal or storytelling
    #[arg(long, default_value = "engaging")]
    pub(crate) style: String,
    /// Posts per batch: 2, 4, 6 or 8 (defaults to AUTOPOST_DEFAULT_BATCH_SIZE)
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Post template id
    #[arg(long, default_value = "product-hero")]
    pub(crate) template: String,
    /// Theme preset applied on top of the brand profile (nova, neon)
    #[arg(long)]
    pub(crate) theme: Option<String>,
    /// Brand tone, e.g. Casual or Elegante
    #[arg(long)]
    pub(crate) tone: Option<String>,
    /// Override the brand name used in hashtags
    #[arg(long)]
    pub(crate) brand_name: Option<String>,
    /// Override AUTOPOST_GENERATION_DELAY_MS
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Print the batch and render payloads as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = autopost_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Generate(args) => generate::run_generate(config, &args).await,
        Commands::Catalog {
            strategy,
            source,
            json,
        } => catalog::run_catalog(&config, &source, &strategy, json).await,
        Commands::Templates => {
            catalog::run_templates();
            Ok(())
        }
        Commands::Brand { theme } => catalog::run_brand(&config, theme.as_deref()),
    }
}
