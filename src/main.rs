use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{Console, Menu};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::export::export_to_file;
use expense_tracker::logging;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Menu-driven personal expense tracker",
    long_about = "Records, edits, filters, summarizes and exports personal \
                  expenses kept in a local SQLite database. Run without a \
                  subcommand to open the interactive menu."
)]
struct Cli {
    /// Directory holding the database, settings, export file and logs
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Export all expenses to CSV without opening the menu
    Export {
        /// Output file path (defaults to the configured export file)
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    paths.ensure_directories()?;
    let first_run = !paths.settings_file().exists();
    let settings = Settings::load_or_create(&paths)?;
    if first_run {
        settings.save(&paths)?;
    }
    let _log_guard = logging::init(&paths, &settings.log_level)?;

    let storage = Storage::new(&paths)?;
    let export_path = paths.export_file(&settings.export_file_name);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout().lock());
            let mut menu = Menu::new(&storage, console, &settings.currency_label, export_path);
            menu.run()?;
        }
        Commands::Export { output } => {
            let output = output.unwrap_or(export_path);
            let summary = export_to_file(
                &storage,
                &output,
                &mut io::stdout().lock(),
                &settings.currency_label,
            )?;
            println!(
                "Exported {} expenses to: {}",
                summary.expense_count,
                output.display()
            );
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Export file:    {}", export_path.display());
            println!("Log directory:  {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency label: {}", settings.currency_label);
            println!("  Log level:      {}", settings.log_level);
        }
    }

    Ok(())
}
