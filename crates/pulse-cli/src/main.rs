mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulse_app::AppState;
use pulse_genai::{ChatSession, GenAiClient};
use pulse_insight::CollabTarget;

const CHAT_PERSONA: &str =
    "You are TrustPulse AI, a world-class senior market and nutrition analyst.";

#[derive(Debug, Parser)]
#[command(name = "pulse-cli")]
#[command(about = "TrustPulse command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a query and fetch the matching product or brand insight.
    Search {
        /// Free-text query, e.g. "iPhone 15" or "Nike".
        query: String,
    },
    /// Find local businesses or services.
    Services {
        query: String,
        /// Directory category filter; "All" disables it.
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// Identify top influencers for a category.
    Influencers { category: String },
    /// Find collaboration matches.
    Collab {
        query: String,
        /// Which side of the market to search.
        #[arg(long, value_parser = parse_target, default_value = "influencers")]
        target: CollabTarget,
    },
    /// Send one message to the TrustPulse analyst persona.
    Chat { message: Vec<String> },
}

fn parse_target(raw: &str) -> Result<CollabTarget, String> {
    match raw.to_lowercase().as_str() {
        "influencers" => Ok(CollabTarget::Influencers),
        "brands" => Ok(CollabTarget::Brands),
        other => Err(format!("unknown target '{other}'; use influencers or brands")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = GenAiClient::new(&config.api_key, config.request_timeout_secs)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query } => run_search(&client, &config, &query).await,
        Commands::Services { query, category } => {
            run_services(&client, &config, &query, &category).await;
        }
        Commands::Influencers { category } => {
            let profiles =
                pulse_insight::search_influencers(&client, &config.text_model, &category).await;
            report::print_influencers(&profiles);
        }
        Commands::Collab { query, target } => {
            let matches =
                pulse_insight::find_collab_matches(&client, &config.text_model, &query, target)
                    .await;
            report::print_collab_matches(&matches);
        }
        Commands::Chat { message } => {
            let mut chat = ChatSession::new(client, &config.text_model, CHAT_PERSONA);
            let reply = chat.send(&message.join(" ")).await?;
            println!("{reply}");
        }
    }

    Ok(())
}

async fn run_search(client: &GenAiClient, config: &pulse_core::AppConfig, query: &str) {
    // Seeded listings are optional for a search run; a missing file only
    // costs the directory view.
    let seeded = match pulse_core::load_listings(&config.listings_path) {
        Ok(file) => file.listings,
        Err(e) => {
            tracing::warn!(error = %e, "seeded listings unavailable");
            Vec::new()
        }
    };

    let mut state = AppState::new(seeded);
    let ticket = state.begin_search();
    let outcome = pulse_insight::run_search(client, &config.text_model, query).await;
    state.resolve_search(ticket, outcome);

    report::print_search_result(&state, query);
}

async fn run_services(
    client: &GenAiClient,
    config: &pulse_core::AppConfig,
    query: &str,
    category: &str,
) {
    let listings = pulse_insight::fetch_local_services(client, &config.text_model, query).await;
    let visible = pulse_app::filter_listings(&listings, "", category);
    report::print_listings(&visible, category);
}
