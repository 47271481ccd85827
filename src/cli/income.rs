//! Income CLI commands
//!
//! Implements CLI commands for income records.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::income::{format_income_details, format_income_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::money::{format_with_symbol, parse_amount};
use crate::models::IncomeCategory;
use crate::reports::parse_date;
use crate::services::{IncomeService, TenantService};
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income record
    Add {
        /// Tenant reference or ID
        tenant: String,
        /// Amount received (e.g. "700.00")
        amount: String,
        /// Income category (standing-order, housing-benefit, refund,
        /// donation, funding, interest)
        #[arg(short, long)]
        category: String,
        /// Date the income arrived (YYYY-MM-DD)
        #[arg(short, long)]
        arrived: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Start of the covered span (YYYY-MM-DD, span categories only)
        #[arg(long)]
        from: Option<String>,
        /// End of the covered span (YYYY-MM-DD, span categories only)
        #[arg(long)]
        to: Option<String>,
    },
    /// List income records
    List {
        /// Filter by tenant reference or ID
        #[arg(short, long)]
        tenant: Option<String>,
    },
    /// Show an income record's details
    Show {
        /// Income ID (full or short form)
        id: String,
    },
    /// Edit an income record
    Edit {
        /// Income ID (full or short form)
        id: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New arrival date (YYYY-MM-DD)
        #[arg(long)]
        arrived: Option<String>,
        /// New span start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// New span end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Delete an income record
    Delete {
        /// Income ID (full or short form)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// List the income categories
    Categories,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let service = IncomeService::new(storage);
    let tenant_service = TenantService::new(storage);

    match cmd {
        IncomeCommands::Add {
            tenant,
            amount,
            category,
            arrived,
            description,
            from,
            to,
        } => {
            let found = tenant_service
                .find(&tenant)?
                .ok_or_else(|| LedgerError::tenant_not_found(&tenant))?;

            let category = parse_category(&category)?;
            let amount = parse_amount(&amount).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid amount: '{}'. Use format like '700.00' or '700'. Error: {}",
                    amount, e
                ))
            })?;
            let arrived_date = parse_date(&arrived)?;
            let from_date = from.map(|s| parse_date(&s)).transpose()?;
            let to_date = to.map(|s| parse_date(&s)).transpose()?;

            let income = service.create(
                &found.reference,
                &description,
                amount,
                category,
                arrived_date,
                from_date,
                to_date,
            )?;

            println!(
                "Created {} income for {}",
                income.category, income.tenant_ref
            );
            println!(
                "  Amount: {}",
                format_with_symbol(income.amount, &settings.currency_symbol)
            );
            if let (Some(from), Some(to)) = (income.from_date, income.to_date) {
                println!("  Covers: {} to {}", from, to);
            }
            println!("  ID: {}", income.id);
        }

        IncomeCommands::List { tenant } => {
            let incomes = if let Some(identifier) = tenant {
                let found = tenant_service
                    .find(&identifier)?
                    .ok_or_else(|| LedgerError::tenant_not_found(&identifier))?;
                service.list_by_tenant(&found.reference)?
            } else {
                service.list()?
            };

            print!("{}", format_income_list(&incomes, &settings.currency_symbol));
        }

        IncomeCommands::Show { id } => {
            let income = service
                .find(&id)?
                .ok_or_else(|| LedgerError::income_not_found(&id))?;

            print!(
                "{}",
                format_income_details(&income, &settings.currency_symbol)
            );
        }

        IncomeCommands::Edit {
            id,
            description,
            amount,
            category,
            arrived,
            from,
            to,
        } => {
            let income = service
                .find(&id)?
                .ok_or_else(|| LedgerError::income_not_found(&id))?;

            if description.is_none()
                && amount.is_none()
                && category.is_none()
                && arrived.is_none()
                && from.is_none()
                && to.is_none()
            {
                println!(
                    "No changes specified. Use --description, --amount, --category, \
                     --arrived, --from or --to."
                );
                return Ok(());
            }

            let amount = amount
                .map(|s| {
                    parse_amount(&s).map_err(|e| {
                        LedgerError::Validation(format!(
                            "Invalid amount: '{}'. Use format like '700.00' or '700'. Error: {}",
                            s, e
                        ))
                    })
                })
                .transpose()?;
            let category = category.map(|s| parse_category(&s)).transpose()?;
            let arrived_date = arrived.map(|s| parse_date(&s)).transpose()?;
            let from_date = from.map(|s| parse_date(&s)).transpose()?;
            let to_date = to.map(|s| parse_date(&s)).transpose()?;

            let updated = service.update(
                income.id,
                description.as_deref(),
                amount,
                category,
                arrived_date,
                from_date,
                to_date,
            )?;
            println!(
                "Updated {} income for {}",
                updated.category, updated.tenant_ref
            );
        }

        IncomeCommands::Delete { id, force } => {
            let income = service
                .find(&id)?
                .ok_or_else(|| LedgerError::income_not_found(&id))?;

            if !force {
                println!("About to delete income record:");
                println!("  Tenant:   {}", income.tenant_ref);
                println!("  Category: {}", income.category);
                println!("  Arrived:  {}", income.arrived_date);
                println!(
                    "  Amount:   {}",
                    format_with_symbol(income.amount, &settings.currency_symbol)
                );
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(income.id)?;
            println!(
                "Deleted income record: {} ({} {})",
                deleted.id, deleted.category, deleted.arrived_date
            );
        }

        IncomeCommands::Categories => {
            println!("Income categories:");
            for category in IncomeCategory::all() {
                if category.requires_date_span() {
                    println!("  {} (covers a from/to span)", category.name());
                } else {
                    println!("  {}", category.name());
                }
            }
        }
    }

    Ok(())
}

/// Parse a category argument
fn parse_category(value: &str) -> LedgerResult<IncomeCategory> {
    IncomeCategory::parse(value).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid category: '{}'. Valid categories: standing-order, housing-benefit, \
             refund, donation, funding, interest",
            value
        ))
    })
}
