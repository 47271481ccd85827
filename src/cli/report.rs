//! CLI commands for reports
//!
//! Provides the rent payment reconciliation report command.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{parse_date, RentPaymentParams, RentPaymentReport};
use crate::services::TenantService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Reconcile rent charges against incomes for a tenant
    #[command(alias = "rent")]
    RentPayment {
        /// Tenant reference or ID
        tenant: String,

        /// Start date (YYYY-MM-DD), expanded to the start of its week
        #[arg(short, long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), expanded to the end of its week
        #[arg(short, long)]
        to: Option<String>,

        /// Group incomes by category with per-category subtotals
        #[arg(short, long)]
        subtotal: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::RentPayment {
            tenant,
            from,
            to,
            subtotal,
            output,
        } => handle_rent_payment_report(storage, settings, tenant, from, to, subtotal, output),
    }
}

/// Handle the rent payment report
fn handle_rent_payment_report(
    storage: &Storage,
    settings: &Settings,
    tenant: String,
    from: Option<String>,
    to: Option<String>,
    subtotal: bool,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let tenant_service = TenantService::new(storage);

    // Find tenant
    let tenant = tenant_service
        .find(&tenant)?
        .ok_or_else(|| LedgerError::tenant_not_found(&tenant))?;

    let params = RentPaymentParams {
        tenant: tenant.id,
        from_date: from.map(|s| parse_date(&s)).transpose()?,
        to_date: to.map(|s| parse_date(&s)).transpose()?,
        show_subtotal: subtotal || settings.subtotal_by_default,
    };

    // Generate report
    let report = RentPaymentReport::generate(storage, &params)?;

    // Output
    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Rent payment report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(settings));
    }

    Ok(())
}
