mod cli;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "contact-guard", version, about = "Contact Guard: form validation and spam screening")]
struct App {
    /// Config file (defaults to {data_dir}/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single field value
    Validate {
        /// Field name (name, email, subject, message)
        field: String,
        /// Raw value
        value: String,
    },
    /// Validate and spam-check a snapshot without submitting
    Check {
        /// JSON object of field values ("-" for stdin)
        snapshot: String,
        #[command(flatten)]
        session: SessionArgs,
        /// Append blocked verdicts to the spam log
        #[arg(long)]
        log: bool,
    },
    /// Run the full submission flow, printing the accepted payload
    Submit {
        /// JSON object of field values ("-" for stdin)
        snapshot: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Inspect the spam log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Behavioral signals the host page would have recorded.
#[derive(Args)]
struct SessionArgs {
    /// Seconds between form open and submit
    #[arg(long, default_value_t = 0.0)]
    elapsed: f64,
    /// Number of input events on the form
    #[arg(long, default_value_t = 0)]
    interactions: u32,
    /// Mouse movement was seen on the page
    #[arg(long)]
    mouse_moved: bool,
}

impl From<SessionArgs> for cli::SessionInput {
    fn from(a: SessionArgs) -> Self {
        cli::SessionInput {
            elapsed_secs: a.elapsed,
            interactions: a.interactions,
            mouse_moved: a.mouse_moved,
        }
    }
}

#[derive(Subcommand)]
enum LogAction {
    /// Print logged spam verdicts
    Show {
        /// Only the most recent N entries
        #[arg(long)]
        last: Option<usize>,
    },
    /// Delete the spam log
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display the effective configuration
    Show,
    /// Get a config value
    Get {
        /// Config key (e.g. min_fill_secs)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Value (JSON: 5.0, 3, "field", ["a","b"])
        value: String,
    },
}

fn main() {
    contact_guard::tracing_init::init_cli_tracing();
    let app = App::parse();
    let config_path = app.config.unwrap_or_else(contact_guard::storage::path_utils::config_path);

    let result = match app.command {
        Commands::Validate { field, value } => cli::validate::run(&field, &value),
        Commands::Check { snapshot, session, log } => {
            cli::check::run(&config_path, &snapshot, session.into(), log)
        }
        Commands::Submit { snapshot, session } => {
            cli::submit::run(&config_path, &snapshot, session.into())
        }
        Commands::Log { action } => match action {
            LogAction::Show { last } => cli::log::show(last),
            LogAction::Clear => cli::log::clear(),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::config::run_show(&config_path),
            ConfigAction::Get { key } => cli::config::run_get(&config_path, &key),
            ConfigAction::Set { key, value } => cli::config::run_set(&config_path, &key, &value),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
