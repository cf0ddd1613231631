//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_tables;
use crate::error::FinResult;
use crate::models::TransactionType;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    #[command(alias = "ls")]
    List {
        /// Only show one type
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<TransactionType>,
    },

    /// Add a new category
    Add {
        /// Category type
        #[arg(value_enum)]
        kind: TransactionType,
        /// Category name (case-sensitive)
        name: String,
    },

    /// Disable a category so it can no longer be used for new transactions
    Disable {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = service.list(kind)?;
            print!("{}", format_category_tables(&categories));
        }

        CategoryCommands::Add { kind, name } => {
            let category = service.add(&name, kind)?;
            println!("✓ Added {} category: {}", kind, category.name);
        }

        CategoryCommands::Disable { name } => {
            let category = service.disable(&name)?;
            println!("✓ Disabled category: {}", category.name);
        }
    }

    Ok(())
}
