//! Rent CLI commands
//!
//! Implements CLI commands for weekly rent charges.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::rent::{format_rent_details, format_rent_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::money::parse_amount;
use crate::reports::parse_date;
use crate::services::{RentService, TenantService};
use crate::storage::Storage;

/// Rent subcommands
#[derive(Subcommand)]
pub enum RentCommands {
    /// Add a weekly rent charge
    Add {
        /// Tenant reference or ID
        tenant: String,
        /// Start of the billing week (YYYY-MM-DD)
        week: String,
        /// Core rent due
        #[arg(long, default_value = "0")]
        rent_due: String,
        /// Housing services charge
        #[arg(long, default_value = "0")]
        services: String,
        /// Utilities charge
        #[arg(long, default_value = "0")]
        utilities: String,
        /// Meals charge
        #[arg(long, default_value = "0")]
        meals: String,
        /// Extra charges
        #[arg(long, default_value = "0")]
        extra: String,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List rent charges
    List {
        /// Filter by tenant reference or ID
        #[arg(short, long)]
        tenant: Option<String>,
    },
    /// Show a rent charge's details
    Show {
        /// Rent ID (full or short form)
        id: String,
    },
    /// Edit a rent charge
    Edit {
        /// Rent ID (full or short form)
        id: String,
        /// New billing week (YYYY-MM-DD)
        #[arg(long)]
        week: Option<String>,
        /// New core rent due
        #[arg(long)]
        rent_due: Option<String>,
        /// New services charge
        #[arg(long)]
        services: Option<String>,
        /// New utilities charge
        #[arg(long)]
        utilities: Option<String>,
        /// New meals charge
        #[arg(long)]
        meals: Option<String>,
        /// New extra charges
        #[arg(long)]
        extra: Option<String>,
        /// Replace the notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a rent charge
    Delete {
        /// Rent ID (full or short form)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Handle a rent command
pub fn handle_rent_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RentCommands,
) -> LedgerResult<()> {
    let service = RentService::new(storage);
    let tenant_service = TenantService::new(storage);

    match cmd {
        RentCommands::Add {
            tenant,
            week,
            rent_due,
            services,
            utilities,
            meals,
            extra,
            notes,
        } => {
            let found = tenant_service
                .find(&tenant)?
                .ok_or_else(|| LedgerError::tenant_not_found(&tenant))?;

            let week_commence = parse_date(&week)?;
            let rent = service.create(
                &found.reference,
                week_commence,
                parse_charge("rent-due", &rent_due)?,
                parse_charge("services", &services)?,
                parse_charge("utilities", &utilities)?,
                parse_charge("meals", &meals)?,
                parse_charge("extra", &extra)?,
                notes.as_deref(),
            )?;

            println!(
                "Created rent charge for {} week of {}",
                rent.tenant_ref, rent.week_commence
            );
            println!(
                "  Total: {}",
                crate::models::money::format_with_symbol(rent.total(), &settings.currency_symbol)
            );
            println!("  ID: {}", rent.id);
        }

        RentCommands::List { tenant } => {
            let rents = if let Some(identifier) = tenant {
                let found = tenant_service
                    .find(&identifier)?
                    .ok_or_else(|| LedgerError::tenant_not_found(&identifier))?;
                service.list_by_tenant(&found.reference)?
            } else {
                service.list()?
            };

            print!("{}", format_rent_list(&rents, &settings.currency_symbol));
        }

        RentCommands::Show { id } => {
            let rent = service
                .find(&id)?
                .ok_or_else(|| LedgerError::rent_not_found(&id))?;

            print!("{}", format_rent_details(&rent, &settings.currency_symbol));
        }

        RentCommands::Edit {
            id,
            week,
            rent_due,
            services,
            utilities,
            meals,
            extra,
            notes,
        } => {
            let rent = service
                .find(&id)?
                .ok_or_else(|| LedgerError::rent_not_found(&id))?;

            if week.is_none()
                && rent_due.is_none()
                && services.is_none()
                && utilities.is_none()
                && meals.is_none()
                && extra.is_none()
                && notes.is_none()
            {
                println!(
                    "No changes specified. Use --week, --rent-due, --services, --utilities, \
                     --meals, --extra or --notes."
                );
                return Ok(());
            }

            let week_commence = week.map(|s| parse_date(&s)).transpose()?;
            let rent_due = rent_due.map(|s| parse_charge("rent-due", &s)).transpose()?;
            let services = services.map(|s| parse_charge("services", &s)).transpose()?;
            let utilities = utilities.map(|s| parse_charge("utilities", &s)).transpose()?;
            let meals = meals.map(|s| parse_charge("meals", &s)).transpose()?;
            let extra = extra.map(|s| parse_charge("extra", &s)).transpose()?;

            let updated = service.update(
                rent.id,
                week_commence,
                rent_due,
                services,
                utilities,
                meals,
                extra,
                notes.as_deref(),
            )?;
            println!(
                "Updated rent charge for {} week of {}",
                updated.tenant_ref, updated.week_commence
            );
        }

        RentCommands::Delete { id, force } => {
            let rent = service
                .find(&id)?
                .ok_or_else(|| LedgerError::rent_not_found(&id))?;

            if !force {
                println!("About to delete rent charge:");
                println!("  Tenant: {}", rent.tenant_ref);
                println!("  Week:   {}", rent.week_commence);
                println!(
                    "  Total:  {}",
                    crate::models::money::format_with_symbol(
                        rent.total(),
                        &settings.currency_symbol
                    )
                );
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(rent.id)?;
            println!(
                "Deleted rent charge: {} ({} week of {})",
                deleted.id, deleted.tenant_ref, deleted.week_commence
            );
        }
    }

    Ok(())
}

/// Parse a charge amount argument
fn parse_charge(flag: &str, value: &str) -> LedgerResult<f64> {
    parse_amount(value).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid --{} amount: '{}'. Use format like '100.00' or '100'. Error: {}",
            flag, value, e
        ))
    })
}
