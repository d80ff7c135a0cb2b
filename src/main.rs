mod catalog;
mod cli;
mod config;
mod display;
mod error;
mod logging;
mod models;
mod renderer;
mod store;
mod worktime;

use clap::{Parser, Subcommand};

use crate::cli::Context;

#[derive(Parser)]
#[command(name = "ctas", version)]
#[command(about = "Clock in, clock out and track your daily working time", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new stamp
    Stamp {
        /// Name or ID of the stamp
        stamp: String,

        /// Name of the stamper (defaults to User.Stamper from the config)
        #[arg(long)]
        stamper: Option<String>,
    },
    /// Show time worked today against the daily target
    Status {
        /// Day to report on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List the stamps of a day
    List {
        /// Day to list (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the known stamps
    Catalog,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Create config.toml and stamps.json in the install root
    Init,
}

fn main() {
    let cli = Cli::parse();
    logging::enable_logging(cli.log);

    let Some(root) = config::install_root() else {
        println!("{}", cli::first_run_message());
        return;
    };
    tracing::debug!(root = %root.display(), "resolved install root");

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init => cli::config::init(&root),
        },
        Commands::Stamp { stamp, stamper } => Context::load(&root).and_then(|ctx| {
            let catalog = ctx.catalog()?;
            cli::stamp::run(&ctx.config, &catalog, &ctx.store, &stamp, stamper)
        }),
        Commands::Status { date } => {
            Context::load(&root).and_then(|ctx| cli::status::run(&ctx.config, &ctx.store, date))
        }
        Commands::List { date } => {
            Context::load(&root).and_then(|ctx| cli::list::stamps(&ctx.config, &ctx.store, date))
        }
        Commands::Catalog => Context::load(&root).and_then(|ctx| {
            let catalog = ctx.catalog()?;
            cli::list::catalog(&ctx.config, &catalog)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
