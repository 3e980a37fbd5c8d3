use calgrid::{commands, config, tui};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Scrollable month-grid calendar", long_about = "Scrollable month-grid calendar\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month as a text grid
    Month {
        /// Year (optional, defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month number 1-12 (optional, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("initial_year: {}", cfg.initial_year);
    println!("number_of_years: {}", cfg.number_of_years);
    println!(
        "today: {}",
        cfg.today
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(system date)".to_string())
    );
    println!("paging_enabled: {}", cfg.paging_enabled);
    println!(
        "weekend: {}",
        cfg.weekend
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("indicators: {} day(s)", cfg.indicators.len());
    println!();
    println!("[theme]");
    println!("label_fg: {:?}", cfg.theme.label_fg);
    println!("background_fg: {:?}", cfg.theme.background_fg);
    println!("today_fg: {:?}", cfg.theme.today_fg);
    println!("picked_today_fg: {:?}", cfg.theme.picked_today_fg);
    println!("weekend_fg: {:?}", cfg.theme.weekend_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Month { year, month } => {
            let first_of_month = commands::resolve_month(year, month, config.today.unwrap_or(today))?;
            commands::month::run(config, today, first_of_month)
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match cli.command {
        Some(command) => execute_command(&config, command),
        // If no subcommand, run TUI
        None => tui::run(config, chrono::Local::now().date_naive()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
