mod news;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsdesk-cli")]
#[command(about = "Headline sentiment over configured RSS feeds")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the configured feeds
    Feeds,
    /// Fetch a feed, classify its headlines, and show the filtered list
    News {
        /// Feed display name (defaults to the first configured feed)
        #[arg(long)]
        feed: Option<String>,

        /// Keyword to filter titles by (case-insensitive)
        #[arg(long, short, default_value = "")]
        query: String,

        /// Print the full view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Suggest up to five headlines containing a keyword
    Suggest {
        /// Feed display name (defaults to the first configured feed)
        #[arg(long)]
        feed: Option<String>,

        /// Keyword to match (case-insensitive)
        #[arg(long, short)]
        query: String,
    },
    /// Render the feed's word cloud as SVG
    Wordcloud {
        /// Feed display name (defaults to the first configured feed)
        #[arg(long)]
        feed: Option<String>,

        /// Write the SVG here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = newsdesk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = newsdesk_core::load_registry(config.feeds_path.as_deref())?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Feeds) => news::run_feeds(&registry),
        Some(Commands::News { feed, query, json }) => {
            news::run_news(&config, &registry, feed.as_deref(), &query, json).await?;
        }
        Some(Commands::Suggest { feed, query }) => {
            news::run_suggest(&config, &registry, feed.as_deref(), &query).await?;
        }
        Some(Commands::Wordcloud { feed, output }) => {
            news::run_wordcloud(&config, &registry, feed.as_deref(), output.as_deref()).await?;
        }
        None => {
            println!("no command given; try `newsdesk-cli news` or `newsdesk-cli --help`");
        }
    }

    Ok(())
}
