//! Tenant CLI commands
//!
//! Implements CLI commands for tenant management.

use clap::Subcommand;

use crate::display::tenant::{format_tenant_details, format_tenant_list};
use crate::error::LedgerResult;
use crate::reports::parse_date;
use crate::services::TenantService;
use crate::storage::Storage;

/// Tenant subcommands
#[derive(Subcommand)]
pub enum TenantCommands {
    /// Add a new tenant
    Add {
        /// Stable reference used by rent and income records (e.g. "T1")
        reference: String,
        /// Full name
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        dob: String,
        /// Gender
        #[arg(short, long, default_value = "")]
        gender: String,
        /// Room reference
        #[arg(short, long, default_value = "")]
        room: String,
    },
    /// List all tenants
    List,
    /// Show tenant details
    Show {
        /// Tenant reference or ID
        tenant: String,
    },
    /// Edit a tenant
    Edit {
        /// Tenant reference or ID
        tenant: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// New gender
        #[arg(short, long)]
        gender: Option<String>,
        /// New room reference
        #[arg(short, long)]
        room: Option<String>,
        /// Set whether the tenant receives housing benefit
        #[arg(long)]
        hb: Option<bool>,
        /// Replace the notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a tenant
    Delete {
        /// Tenant reference or ID
        tenant: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Handle a tenant command
pub fn handle_tenant_command(storage: &Storage, cmd: TenantCommands) -> LedgerResult<()> {
    let service = TenantService::new(storage);

    match cmd {
        TenantCommands::Add {
            reference,
            name,
            dob,
            gender,
            room,
        } => {
            let dob = parse_date(&dob)?;
            let tenant = service.create(&reference, &name, dob, &gender, &room)?;

            println!("Created tenant: {}", tenant.name);
            println!("  Reference: {}", tenant.reference);
            println!("  DOB: {}", tenant.dob);
            if !tenant.room.is_empty() {
                println!("  Room: {}", tenant.room);
            }
            println!("  ID: {}", tenant.id);
        }

        TenantCommands::List => {
            let tenants = service.list()?;
            print!("{}", format_tenant_list(&tenants));
        }

        TenantCommands::Show { tenant } => {
            let found = service
                .find(&tenant)?
                .ok_or_else(|| crate::error::LedgerError::tenant_not_found(&tenant))?;

            print!("{}", format_tenant_details(&found));
        }

        TenantCommands::Edit {
            tenant,
            name,
            dob,
            gender,
            room,
            hb,
            notes,
        } => {
            let found = service
                .find(&tenant)?
                .ok_or_else(|| crate::error::LedgerError::tenant_not_found(&tenant))?;

            if name.is_none()
                && dob.is_none()
                && gender.is_none()
                && room.is_none()
                && hb.is_none()
                && notes.is_none()
            {
                println!("No changes specified. Use --name, --dob, --gender, --room, --hb or --notes.");
                return Ok(());
            }

            let dob = dob.map(|s| parse_date(&s)).transpose()?;

            let updated = service.update(
                found.id,
                name.as_deref(),
                dob,
                gender.as_deref(),
                room.as_deref(),
                hb,
                notes.as_deref(),
            )?;
            println!("Updated tenant: {}", updated.name);
        }

        TenantCommands::Delete { tenant, force } => {
            let found = service
                .find(&tenant)?
                .ok_or_else(|| crate::error::LedgerError::tenant_not_found(&tenant))?;

            if !force {
                println!("About to delete tenant:");
                println!("  Reference: {}", found.reference);
                println!("  Name:      {}", found.name);
                println!();
                println!("Rent and income records referencing this tenant are kept.");
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted tenant: {} ({})", deleted.name, deleted.reference);
        }
    }

    Ok(())
}
