use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ecoboard::leaderboard::{build_leaderboard, AliasGenerator, PipelineOptions};
use ecoboard::source::HttpSource;

const EXIT_SUCCESS: i32 = 0;
const EXIT_UPSTREAM: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the ranked leaderboard (default if no subcommand)
    List,
    /// Show one entry's planetary-boundary breakdown by its rank number
    Breakdown {
        /// Rank of the entry to inspect (1-based, as shown in the list)
        rank: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "ecoboard")]
#[command(about = "Environmental impact leaderboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/ecoboard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Maximum number of rows to request and display
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// Emit the raw JSON response instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List);

    let config_path = cli.config.map(PathBuf::from);
    let config = match ecoboard::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        match &config.source_url {
            Some(url) => eprintln!("Score service: {}", url),
            None => eprintln!("No score service configured; sample-data mode"),
        }
    }

    let aliases = match config.aliases.clone() {
        Some(pool) => AliasGenerator::with_aliases(pool),
        None => AliasGenerator::default(),
    };

    let options = PipelineOptions {
        direction: config.score_direction,
        allow_partial_scores: config.allow_partial_scores,
        limit: cli.limit.or(config.limit),
        aliases,
    };

    let source = HttpSource::new(config.source_url.clone());
    let response = build_leaderboard(&source, &options).await;

    if cli.verbose {
        eprintln!("Status: {}", response.http_status());
        if response.rejected_entries > 0 {
            eprintln!("Rejected {} malformed entries", response.rejected_entries);
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&response) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                eprintln!("Failed to serialize response: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        let code = if response.success {
            EXIT_SUCCESS
        } else {
            EXIT_UPSTREAM
        };
        std::process::exit(code);
    }

    if !response.success {
        eprintln!(
            "Leaderboard unavailable: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(EXIT_UPSTREAM);
    }

    let use_colors = ecoboard::output::should_use_colors();

    // Degraded (sample-data) responses always announce themselves
    if let Some(warning) = &response.warning {
        eprintln!("{}", ecoboard::output::format_warning(warning, use_colors));
    }

    match command {
        Commands::List => {
            println!(
                "{}",
                ecoboard::output::format_leaderboard_table(
                    &response,
                    config.score_direction,
                    use_colors
                )
            );
            println!();
            println!(
                "{}",
                ecoboard::output::format_summary(&response, config.score_direction)
            );
        }
        Commands::Breakdown { rank } => {
            match response.leaderboard.iter().find(|e| e.rank == rank) {
                Some(entry) => {
                    println!(
                        "{}",
                        ecoboard::output::format_entry_detail(
                            entry,
                            config.score_direction,
                            use_colors
                        )
                    );
                }
                None => {
                    eprintln!(
                        "Invalid rank {}. Must be between 1 and {}.",
                        rank,
                        response.leaderboard.len()
                    );
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
