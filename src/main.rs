use anyhow::Result;
use clap::{Parser, Subcommand};

use rentledger::cli::{
    handle_audit_command, handle_income_command, handle_rent_command, handle_report_command,
    handle_room_command, handle_tenant_command,
};
use rentledger::config::{paths::LedgerPaths, settings::Settings};
use rentledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "rentledger",
    version,
    about = "Terminal-based tenancy and rent reconciliation ledger",
    long_about = "RentLedger tracks the tenants and rooms of a shared property, \
                  the weekly rent charges raised against each tenant and the \
                  incomes received for them, and reconciles the two over \
                  week-aligned date windows."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tenant management commands
    #[command(subcommand)]
    Tenant(rentledger::cli::TenantCommands),

    /// Room management commands
    #[command(subcommand)]
    Room(rentledger::cli::RoomCommands),

    /// Weekly rent charge commands
    #[command(subcommand)]
    Rent(rentledger::cli::RentCommands),

    /// Income record commands
    #[command(subcommand)]
    Income(rentledger::cli::IncomeCommands),

    /// Report commands
    #[command(subcommand)]
    Report(rentledger::cli::ReportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tenant(cmd)) => {
            handle_tenant_command(&storage, cmd)?;
        }
        Some(Commands::Room(cmd)) => {
            handle_room_command(&storage, cmd)?;
        }
        Some(Commands::Rent(cmd)) => {
            handle_rent_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing RentLedger at: {}", paths.data_dir().display());
            rentledger::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  rentledger room add R1 \"Front bedroom\"");
            println!("  rentledger tenant add T1 \"John Doe\" --dob 1980-04-03 --room R1");
            println!("  rentledger rent add T1 2025-02-03 --rent-due 100");
            println!();
            println!("Run 'rentledger --help' for the full command list.");
        }
        Some(Commands::Config) => {
            println!("RentLedger Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Subtotal by default: {}", settings.subtotal_by_default);
        }
        None => {
            println!("RentLedger - Terminal-based tenancy and rent reconciliation ledger");
            println!();
            println!("Run 'rentledger --help' for usage information.");
            println!("Run 'rentledger init' to set up a new ledger.");
        }
    }

    Ok(())
}
