use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use quizq::config::{self, AppConfig};
use quizq::output::{self, ColorMode, OutputFormat};
use quizq::query;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quizq")]
#[command(about = "Parse quiz catalog search queries into terms, filters and operators")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query to parse (when no subcommand is given)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its structure
    Parse {
        /// Query words, joined with single spaces (put `-word` after `--`)
        query: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// When to use colors
        #[arg(long, value_enum)]
        color: Option<ColorMode>,
    },
    /// Show the raw tokens a query splits into
    Tokens {
        /// Query words, joined with single spaces (put `-word` after `--`)
        query: Vec<String>,

        /// When to use colors
        #[arg(long, value_enum)]
        color: Option<ColorMode>,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Locating or rewriting the config file must work even when it is corrupt
    let skip_load = matches!(
        cli.command,
        Some(Commands::Config {
            action: ConfigAction::Path | ConfigAction::Init { .. }
        })
    );
    let app_config = if skip_load {
        AppConfig::default()
    } else {
        load_config(cli.config.as_deref())?
    };

    setup_logging(cli.verbose.max(app_config.verbosity));
    debug!("config: {:?}", app_config);

    match cli.command {
        Some(Commands::Parse {
            query,
            format,
            color,
        }) => {
            let format = format.unwrap_or(app_config.format);
            let color = color.unwrap_or(app_config.color);
            run_parse(&query.join(" "), format, color)?;
        }
        Some(Commands::Tokens { query, color }) => {
            let color = color.unwrap_or(app_config.color);
            let tokens = query::tokenize(&query.join(" "));
            info!("{} raw tokens", tokens.len());
            output::print_raw_tokens(&tokens, color)?;
        }
        Some(Commands::Config { action }) => {
            let config_path = match cli.config {
                Some(path) => path,
                None => config::get_config_path()?,
            };
            handle_config_command(action, &config_path, &app_config)?;
        }
        None => {
            run_parse(&cli.query.join(" "), app_config.format, app_config.color)?;
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn run_parse(input: &str, format: OutputFormat, color: ColorMode) -> Result<()> {
    match query::parse(input) {
        Some(parsed) => {
            output::print_query(&parsed, format, color)?;
        }
        None => {
            warn!("empty query, nothing to parse");
        }
    }
    Ok(())
}

fn handle_config_command(action: ConfigAction, path: &Path, current: &AppConfig) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let json = serde_json::to_string_pretty(current).context("Failed to serialize config")?;
            println!("{}", json);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!("Config already exists: {} (use --force to overwrite)", path.display());
                return Ok(());
            }
            AppConfig::default().save_to(path)?;
            println!("Wrote default config: {}", path.display());
        }
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env().init();
        return;
    }

    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}
