//! Housing Dashboard CLI
//!
//! Command-line access to the same dashboard the server renders:
//! - Render a page snapshot to a file
//! - Run a prediction
//! - Print the summary counters
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use housing_dashboard::client::{DashboardApi, HttpApiClient, HttpApiConfig};
use housing_dashboard::config::{generate_default_config, Config, LoadedConfig};
use housing_dashboard::dashboard::{
    format_price, summary_counters, Dashboard, PredictionForm, PREDICTION_ERROR_MESSAGE,
};
use housing_dashboard::page::{render_html, Document, Tab};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "housing-dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Housing price dashboard from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Housing API URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard page to HTML
    Snapshot {
        /// Active tab (overview, analysis, models)
        #[arg(short, long, default_value = "overview")]
        tab: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Predict a house price with both models
    Predict {
        #[arg(long, default_value = "2013.5")]
        transaction_date: String,
        #[arg(long, default_value = "10")]
        house_age: String,
        #[arg(long, default_value = "500")]
        distance_to_mrt: String,
        #[arg(long, default_value = "5")]
        num_convenience_stores: String,
        #[arg(long, default_value = "24.97")]
        latitude: String,
        #[arg(long, default_value = "121.54")]
        longitude: String,
    },

    /// Show the dataset summary counters
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    housing_dashboard::logging::init(&loaded.config.logging);
    loaded.report();

    let mut config = loaded.config;
    if let Some(url) = &cli.api_url {
        config.backend.url = url.clone();
    }

    let json = cli.format == "json";

    match cli.command {
        Commands::Snapshot { tab, output } => {
            let tab: Tab = tab.parse()?;
            let (dashboard, doc) = dashboard(&config)?;

            dashboard.init().await;
            dashboard.switch_tab(tab).await;

            let html = render_html(&doc, chrono::Utc::now());
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "Rendered {} tab ({} charts) to {}",
                        tab,
                        doc.total_plots(),
                        path.display()
                    );
                }
                None => print!("{}", html),
            }
        }

        Commands::Predict {
            transaction_date,
            house_age,
            distance_to_mrt,
            num_convenience_stores,
            latitude,
            longitude,
        } => {
            let form = PredictionForm {
                transaction_date,
                house_age,
                distance_to_mrt,
                num_convenience_stores,
                latitude,
                longitude,
            };
            let (dashboard, _) = dashboard(&config)?;

            match dashboard.make_prediction(&form).await {
                Ok(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Ok(result) => {
                    println!(
                        "Linear Regression: {}",
                        format_price(result.linear_regression_prediction)
                    );
                    println!(
                        "Random Forest:     {}",
                        format_price(result.random_forest_prediction)
                    );
                }
                Err(e) => {
                    eprintln!("{}", PREDICTION_ERROR_MESSAGE);
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Summary => {
            let api = HttpApiClient::new(HttpApiConfig::from(&config.backend))?;
            let summary = match api.summary().await {
                Ok(summary) => summary,
                Err(e) => {
                    eprintln!("Cannot load summary from {}", config.backend.url);
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let [records, price, age, distance] = summary_counters(&summary);
                println!("Total Records:    {}", records);
                println!("Avg Price:        {}", price);
                println!("Avg House Age:    {}", age);
                println!("Avg Distance MRT: {}", distance);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)?;
                println!("Config written to {}", path.display());
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

type CliDashboard = Dashboard<HttpApiClient, Document>;

fn dashboard(config: &Config) -> anyhow::Result<(CliDashboard, Arc<Document>)> {
    let api = Arc::new(HttpApiClient::new(HttpApiConfig::from(&config.backend))?);
    let doc = Arc::new(Document::new());
    Ok((Dashboard::new(api, Arc::clone(&doc)), doc))
}
