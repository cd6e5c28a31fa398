use clap::{Parser, Subcommand};
use hotel_recommender::{RecommendOptions, RecommendRequest, Recommender, RecommenderConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "hotel_recommender=info";

#[derive(Parser)]
#[command(name = "hotel-recommender")]
#[command(about = "Hotel recommendations by amenity preferences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset path (CSV, or JSON when it ends in .json), overrides config and HOTEL_DATA_PATH
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List cities available in the dataset
    Cities,

    /// Show the feature catalog
    Features,

    /// Recommend hotels in a city
    Recommend {
        /// City name (case-insensitive)
        city: String,

        /// Wanted feature label, repeatable (e.g. --feature "Free WiFi")
        #[arg(short, long = "feature")]
        features: Vec<String>,

        /// Maximum results
        #[arg(short, long)]
        top_k: Option<usize>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<RecommenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::from_file(path)?,
        None => RecommenderConfig::default(),
    };
    config.apply_env_overrides()?;
    if let Some(data) = &cli.data {
        config.dataset.path = data.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let engine = Recommender::from_config(&config)?;

    match cli.command {
        Commands::Cities => {
            for city in engine.cities() {
                println!("{}", city);
            }
        }

        Commands::Features => {
            println!("📋 Feature catalog:");
            for (i, entry) in engine.catalog().entries().iter().enumerate() {
                println!(
                    "   {:>2}. {:<18} ← {} ({} listings)",
                    i + 1,
                    entry.label,
                    entry.token,
                    entry.frequency
                );
            }
        }

        Commands::Recommend { city, features, top_k, json } => {
            let preference = engine.catalog().preference_from_labels(&features)?;
            let mut options = engine.options();
            if let Some(k) = top_k {
                options = RecommendOptions { top_k: k.max(1) };
            }

            let result = engine.recommend_with(&RecommendRequest { city, preference }, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            if let Some(warning) = result.warning() {
                println!("⚠️  {}", warning);
                return Ok(());
            }

            println!("🏨 Top recommended hotels in {}:", result.city);
            println!(
                "   {:<3} {:<40} {:>6} {:>10} {:>10}",
                "#", "Hotel", "Rating", "Price", "Similarity"
            );
            for (i, hotel) in result.hotels.iter().enumerate() {
                println!(
                    "   {:<3} {:<40} {:>6.1} {:>10.2} {:>10.3}",
                    i + 1,
                    hotel.hotel_name,
                    hotel.rating,
                    hotel.price,
                    hotel.similarity
                );
                if !hotel.matched_features.is_empty() {
                    println!("       ✓ {}", hotel.matched_features.join(", "));
                }
            }
            println!(
                "\n   {} of {} qualifying hotels, {:.2}ms",
                result.hotels.len(),
                result.qualifying,
                result.latency_ms
            );
        }
    }

    Ok(())
}
