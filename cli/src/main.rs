//! Terminal front end for the recipes API.
mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use recipes_core::{
    ApiClient, ClientConfig, DifficultyFilter, RatingFilter, RecipeDetailViewModel,
    RecipeListViewModel,
};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Browse recipes from the dummyjson recipes API", long_about = None)]
struct Cli {
    /// API base URL (default: $RECIPES_BASE_URL or https://dummyjson.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered
    List {
        /// Difficulty: all, easy, medium, hard
        #[arg(long, default_value_t = DifficultyFilter::All)]
        difficulty: DifficultyFilter,
        /// Minimum rating: all, 1+, 2+, 3+, 4+
        #[arg(long, default_value_t = RatingFilter::All)]
        rating: RatingFilter,
    },
    /// Show one recipe in full
    Show {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.base_url {
        Some(base_url) => ClientConfig::new(base_url),
        None => ClientConfig::from_env(),
    };
    tracing::debug!(base_url = %config.base_url, "using API");
    let client = ApiClient::from_config(&config);

    match cli.command {
        Commands::List { difficulty, rating } => list(client, difficulty, rating).await,
        Commands::Show { id } => show(client, id).await,
    }
}

async fn list(client: ApiClient, difficulty: DifficultyFilter, rating: RatingFilter) -> Result<()> {
    let vm = RecipeListViewModel::new(client);
    // Selections made before the first load are applied when it lands.
    vm.set_selected_difficulty(difficulty);
    vm.set_selected_rating(rating);

    let renderer = tokio::spawn(render::follow(vm.subscribe(), render::list));
    vm.load_recipes().await;

    let error = vm.error_message();
    drop(vm);
    renderer.await?;

    match error {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

async fn show(client: ApiClient, id: i64) -> Result<()> {
    let vm = RecipeDetailViewModel::new(client);

    let renderer = tokio::spawn(render::follow(vm.subscribe(), render::detail));
    vm.load_recipe(id).await;

    let error = vm.error();
    drop(vm);
    renderer.await?;

    match error {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}
