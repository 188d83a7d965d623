// boardwise - tells you what your task board is quietly begging for
//
// Main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use boardwise_lib::{
    core::{ApiResponse, BoardRecommender},
    recommend::Recommendation,
    snapshot, Database, EngineConfig, RecommendationEngine,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "boardwise", version, about = "Smart recommendations for task boards")]
struct Cli {
    /// SQLite database (default: ~/.boardwise/boards.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Engine config TOML (default: ~/.boardwise/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a board snapshot JSON file
    Analyze {
        /// Path to the snapshot
        file: PathBuf,

        /// Print {"recommendations": [...]} instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Store a board snapshot in the database
    Import {
        /// Path to the snapshot (must name an owner)
        file: PathBuf,
    },

    /// Recommendations for a stored board, as the API would answer
    Recommend {
        #[arg(long)]
        board: String,

        #[arg(long)]
        user: String,
    },

    /// Show database statistics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("failed to load engine config")?;

    match cli.command {
        Commands::Analyze { file, json } => handle_analyze(&file, json, &config),
        Commands::Import { file } => handle_import(&file, cli.db.as_deref()).await,
        Commands::Recommend { board, user } => {
            handle_recommend(&board, &user, cli.db.as_deref(), &config).await
        }
        Commands::Status => handle_status(cli.db.as_deref()).await,
    }
}

fn handle_analyze(file: &Path, as_json: bool, config: &EngineConfig) -> Result<()> {
    let board = snapshot::load_from_file(file)
        .with_context(|| format!("could not read snapshot {}", file.display()))?;
    let engine = RecommendationEngine::new(config)?;

    let recommendations = engine.recommend(&board.lists);

    if as_json {
        let body = json!({ "recommendations": recommendations });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_report(&board.title, &recommendations);
    }

    Ok(())
}

async fn handle_import(file: &Path, db_path: Option<&Path>) -> Result<()> {
    let board = snapshot::load_from_file(file)
        .with_context(|| format!("could not read snapshot {}", file.display()))?;
    let db = open_database(db_path).await?;

    db.import_board(&board).await?;

    println!(
        "✓ Imported \"{}\" ({} lists, {} cards)",
        board.title,
        board.lists.len(),
        board.card_count()
    );

    Ok(())
}

async fn handle_recommend(
    board_id: &str,
    user_id: &str,
    db_path: Option<&Path>,
    config: &EngineConfig,
) -> Result<()> {
    let db = Arc::new(open_database(db_path).await?);
    let recommender = BoardRecommender::new(db, config)?;

    let response = ApiResponse::from_result(recommender.recommendations_for(board_id, user_id).await);
    println!("{}", response.to_json()?);

    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_status(db_path: Option<&Path>) -> Result<()> {
    let db = open_database(db_path).await?;
    let stats = db.stats().await?;

    println!("\nboardwise Status");
    println!("{}", "=".repeat(60));
    println!("\nDatabase: {}", db.path().display());
    println!("  Boards: {}", stats.total_boards);
    println!("  Lists:  {}", stats.total_lists);
    println!("  Cards:  {}", stats.total_cards);
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn open_database(db_path: Option<&Path>) -> Result<Database> {
    let path = match db_path {
        Some(p) => p.to_path_buf(),
        None => Database::default_path().context("could not find home directory")?,
    };

    Database::new(&path)
        .await
        .with_context(|| format!("could not open database {}", path.display()))
}

fn print_report(board_title: &str, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("Nothing to suggest for \"{}\". Nice board!", board_title);
        return;
    }

    println!("{}", "=".repeat(60));
    println!("💡 Recommendations for \"{}\"", board_title);
    println!("{}", "=".repeat(60));

    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "\n{:3}. [{}] {} ({})",
            i + 1,
            rec.priority,
            rec.title,
            rec.type_name()
        );
        println!("     {}", rec.description);
        println!("     💭 {}", rec.reason);
    }

    println!("\n{}", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_shows_info() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::INFO)
        );
    }

    #[test]
    fn test_cli_parses_recommend() {
        let cli = Cli::try_parse_from(["boardwise", "recommend", "--board", "b1", "--user", "u1"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recommend { ref board, ref user } if board == "b1" && user == "u1"
        ));
    }
}
