use anyhow::Result;
use clap::{Parser, Subcommand};

use burnrate::cli::{
    handle_audit_command, handle_category_command, handle_expense_command, handle_show_command,
    handle_watch_command, CategoryCommands, ExpenseCommands, WatchOptions,
};
use burnrate::config::{paths::BurnRatePaths, settings::Settings};
use burnrate::storage::Storage;

#[derive(Parser)]
#[command(
    name = "burnrate",
    author = "Kaylee Beyene",
    version,
    about = "Live ticker for what your fixed monthly expenses cost right now",
    long_about = "burnrate turns a list of fixed monthly expenses into a live ticker: \
                  what they cost per second, minute, hour, day, week, month and year, \
                  and how much has been spent since the start of the current month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Print the current rates once
    Show {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
        /// Decimal places for this invocation
        #[arg(short, long)]
        decimals: Option<u8>,
    },

    /// Print the rates on every tick until interrupted
    Watch {
        /// Decimal places for this invocation
        #[arg(short, long)]
        decimals: Option<u8>,
        /// Milliseconds between ticks
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this many ticks
        #[arg(long, hide = true)]
        ticks: Option<u64>,
    },

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize settings and an empty expense document
    Init,

    /// Show current configuration and paths
    Config,
}

impl Commands {
    fn is_mutation(&self) -> bool {
        match self {
            Commands::Category(cmd) => cmd.is_mutation(),
            Commands::Expense(cmd) => cmd.is_mutation(),
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BurnRatePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    if let Err(e) = storage.load_all() {
        // Never overwrite a document that failed to load
        if cli.command.as_ref().is_some_and(Commands::is_mutation) {
            return Err(e.into());
        }
        eprintln!("Warning: {} (continuing with no expenses)", e);
    }

    match cli.command {
        Some(Commands::Tui) => {
            burnrate::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Show { json, decimals }) => {
            let settings = settings.with_decimal_places(decimals);
            handle_show_command(&storage, &settings, json)?;
        }
        Some(Commands::Watch {
            decimals,
            interval_ms,
            ticks,
        }) => {
            let settings = settings.with_decimal_places(decimals);
            handle_watch_command(&storage, &settings, WatchOptions { interval_ms, ticks })?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing burnrate at: {}", paths.base_dir().display());
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            if storage.initialize()? {
                println!("Created empty expense document.");
            } else {
                println!("Expense document already exists, left untouched.");
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'burnrate category add <name>' to create a category,");
            println!("then 'burnrate expense add <category> <name> <amount>'.");
        }
        Some(Commands::Config) => {
            println!("burnrate Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Decimal places:   {}", settings.decimal_places);
            println!(
                "  Currency symbol:  {} ({:?})",
                settings.currency_symbol, settings.symbol_position
            );
            println!(
                "  Separators:       thousands '{}', decimal '{}'",
                settings.thousands_separator, settings.decimal_separator
            );
            println!("  Timestamp format: {}", settings.datetime_format);
            println!("  Locale:           {}", settings.locale);
            println!("  Tick interval:    {} ms", settings.tick_interval_ms);
        }
        None => {
            println!("burnrate - live ticker for your fixed monthly expenses");
            println!();
            println!("Run 'burnrate --help' for usage information.");
            println!("Run 'burnrate show' for the current rates.");
            println!("Run 'burnrate tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
