use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skinscan::ingredients::{self, Effect, SkinType};
use skinscan::scoring::{self, Scorer, SeededMatchScore};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_NO_DATA: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// Colored report for terminals
    #[default]
    Human,
    /// One tab-separated row per ingredient
    Tsv,
    /// Full analysis as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an ingredient list
    Analyze {
        /// Label ingredient text, e.g. "Water, Glycerin, Fragrance" (may be repeated)
        ingredients: Vec<String>,

        /// Read label ingredient text from a file ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Seed for a repeatable match score
        #[arg(long)]
        seed: Option<u64>,

        /// Skin type for per-ingredient notes (overrides the configured profile)
        #[arg(long, value_enum)]
        skin_type: Option<SkinType>,
    },
    /// Show what the catalog knows about an ingredient (exact name)
    Lookup {
        name: String,
    },
    /// List catalog ingredients
    Catalog {
        /// Only show one effect class
        #[arg(long, value_enum)]
        effect: Option<Effect>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "skinscan")]
#[command(about = "Skincare ingredient safety scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/skinscan/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Collect ingredient names from positional label text and/or a file.
fn read_ingredient_names(texts: &[String], file: Option<&PathBuf>) -> Result<Vec<String>> {
    let mut names: Vec<String> = texts
        .iter()
        .flat_map(|t| ingredients::parse_ingredient_text(t))
        .collect();

    if let Some(path) = file {
        let content = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read ingredients from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read ingredients from {}", path.display()))?
        };
        names.extend(ingredients::parse_ingredient_text(&content));
    }

    Ok(names)
}

/// Load the config file and check its scoring section, exiting on failure.
fn load_validated_config(path: Option<PathBuf>) -> skinscan::config::Config {
    let config = match skinscan::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = scoring::validate_scoring(&config.effective_scoring()) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();
    let use_colors = skinscan::output::should_use_colors();

    match cli.command {
        Commands::Analyze {
            ingredients,
            file,
            format,
            seed,
            skin_type,
        } => {
            let config = load_validated_config(cli.config);
            let mut profile = config.effective_profile();
            if let Some(t) = skin_type {
                profile.skin_type = t;
            }

            let names = match read_ingredient_names(&ingredients, file.as_ref()) {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_ERROR);
                }
            };
            if names.is_empty() {
                eprintln!("No ingredient data found.");
                std::process::exit(EXIT_NO_DATA);
            }
            info!(count = names.len(), "analyzing ingredient list");

            let scorer = match Scorer::new(config.effective_scoring()) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let scorer = match seed {
                Some(seed) => scorer.with_match_scorer(SeededMatchScore::new(seed)),
                None => scorer,
            };

            let analysis = match scorer.analyze(&names, &profile) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_NO_DATA);
                }
            };

            match format {
                OutputFormat::Human => {
                    println!(
                        "{}",
                        skinscan::output::format_report(
                            &analysis,
                            Some(profile.skin_type),
                            use_colors
                        )
                    );
                }
                OutputFormat::Tsv => println!("{}", skinscan::output::format_tsv(&analysis)),
                OutputFormat::Json => match skinscan::output::format_json(&analysis) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize analysis: {}", e);
                        std::process::exit(EXIT_ERROR);
                    }
                },
            }
        }
        Commands::Lookup { name } => match ingredients::lookup(&name) {
            Some(record) => println!("{}", skinscan::output::format_record(record, use_colors)),
            None => {
                eprintln!(
                    "'{}' is not in the catalog (names are matched exactly, including case).",
                    name
                );
                std::process::exit(EXIT_NO_DATA);
            }
        },
        Commands::Catalog { effect } => {
            let records: Vec<_> = ingredients::records()
                .iter()
                .filter(|r| effect.map_or(true, |f| r.effect == f))
                .collect();
            println!("{}", skinscan::output::format_catalog(&records, use_colors));
        }
        Commands::Init => {
            if let Err(e) = skinscan::config::run_init_wizard(cli.config) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_ERROR);
            }
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
