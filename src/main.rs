use catalog_navigator::commands::*;
use catalog_navigator::core::{error::Result, print_error, session::Layout};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-navigator")]
#[command(about = "Browse a hierarchical product catalog")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive browsing session
    Browse {
        /// Catalog JSON file (defaults to the configured one)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Layout to start in: wide or compact
        #[arg(long)]
        layout: Option<Layout>,
    },
    /// Print the whole catalog hierarchy
    Tree {
        /// Catalog JSON file, or - for stdin
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show one entry by id: product details or category contents
    Show {
        /// Catalog JSON file, or - for stdin
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Node id (e.g., "s7-1200")
        id: String,
    },
    /// Inspect or change saved preferences
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Catalog used when --catalog is omitted
    SetCatalog { path: PathBuf },
    /// Layout browse starts in
    SetLayout { layout: Layout },
    /// Target of the "Request Quote" link
    SetQuoteLink { link: String },
}

impl From<ConfigCommands> for ConfigAction {
    fn from(command: ConfigCommands) -> Self {
        match command {
            ConfigCommands::Show => ConfigAction::Show,
            ConfigCommands::SetCatalog { path } => ConfigAction::SetCatalog { path },
            ConfigCommands::SetLayout { layout } => ConfigAction::SetLayout { layout },
            ConfigCommands::SetQuoteLink { link } => ConfigAction::SetQuoteLink { link },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if cli.no_color || env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let result: Result<()> = match cli.command {
        Commands::Browse { catalog, layout } => execute_browse(catalog, layout),
        Commands::Tree { catalog } => execute_tree(catalog),
        Commands::Show { catalog, id } => execute_show(catalog, id),
        Commands::Config { action } => execute_config(action.into()),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
