use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use shelf_core::{Pricer, RootConfig, SessionStore};
use shelf_infrastructure::{ConfigService, InMemorySessionStore, JsonSessionStore, init_tracing};

mod commands;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelfbot CLI - shelving configurator and price estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the configurator in the terminal
    Chat {
        /// Session key to use in the data file
        #[arg(long, default_value = "cli")]
        user: String,
        /// Keep sessions in memory only
        #[arg(long)]
        ephemeral: bool,
    },
    /// Print the priced summary of a user's stored sections
    Quote {
        #[arg(long)]
        user: String,
    },
    /// Estimate the bill of materials for one shelving unit
    Bom(BomArgs),
}

#[derive(Args)]
pub struct BomArgs {
    /// Post height, mm
    #[arg(long)]
    pub height: u32,
    /// Bay width, mm
    #[arg(long)]
    pub width: u32,
    /// Shelf depth, mm
    #[arg(long)]
    pub depth: u32,
    /// Bays sharing posts
    #[arg(long)]
    pub sections: u32,
    /// Shelves per bay
    #[arg(long)]
    pub levels: u32,
    /// Shelf board thickness, mm
    #[arg(long)]
    pub thickness: Option<u32>,
    /// Extra material allowance, percent
    #[arg(long)]
    pub waste: Option<f64>,
    #[arg(long)]
    pub post_price: Option<f64>,
    #[arg(long)]
    pub beam_price: Option<f64>,
    #[arg(long)]
    pub shelf_price: Option<f64>,
    #[arg(long)]
    pub fastener_price: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::new()?.get_config()?;
    let _guard = init_tracing("warn", config.log_dir.as_deref());

    match cli.command {
        Commands::Chat { user, ephemeral } => {
            let store: Arc<dyn SessionStore> = if ephemeral {
                Arc::new(InMemorySessionStore::new())
            } else {
                Arc::new(JsonSessionStore::new(config.data_file()))
            };
            commands::chat::run(store, pricer(&config), &user).await?
        }
        Commands::Quote { user } => {
            let store = Arc::new(JsonSessionStore::new(config.data_file()));
            commands::quote::run(store, pricer(&config), &user).await?
        }
        Commands::Bom(args) => commands::bom::run(&args, &config.pricing.bom),
    }

    Ok(())
}

fn pricer(config: &RootConfig) -> Arc<dyn Pricer> {
    Arc::from(config.pricing.build_pricer())
}
