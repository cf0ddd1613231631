use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fin::cli::{
    handle_category_command, handle_summary_command, handle_transaction_command, SummaryArgs,
    TransactionArgs,
};
use fin::config::{paths::FinPaths, settings::Settings};
use fin::models::TransactionType;
use fin::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fin",
    version,
    about = "Personal finance tracker CLI",
    long_about = "fin records income and expenses by category and date, imports them \
                  from CSV files, and prints or exports summaries for any period."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense or import expenses from CSV
    Expense(TransactionArgs),

    /// Record income or import income from CSV
    Income(TransactionArgs),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(fin::cli::CategoryCommands),

    /// Summarize income and expenses by category
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let paths = FinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::open(&paths)?;
    storage.initialize()?;

    match cli.command {
        Some(Commands::Expense(args)) => {
            handle_transaction_command(&storage, &settings, TransactionType::Expense, args)?;
        }
        Some(Commands::Income(args)) => {
            handle_transaction_command(&storage, &settings, TransactionType::Income, args)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&storage, &settings, args)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("fin Configuration");
            println!("=================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  CSV delimiter:            {}", settings.csv_delimiter);
            println!("  Default expense category: {}", settings.default_expense_category);
            println!("  Default income category:  {}", settings.default_income_category);
            println!("  Currency symbol:          {}", settings.currency_symbol);
        }
        None => {
            println!("fin - personal finance tracker");
            println!();
            println!("Run 'fin --help' for usage information.");
        }
    }

    Ok(())
}
