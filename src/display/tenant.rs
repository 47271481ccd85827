//! Tenant display formatting
//!
//! Formats tenants for terminal output in table and detail views.

use chrono::DateTime;

use crate::models::Tenant;

/// Format a list of tenants as a table
pub fn format_tenant_list(tenants: &[Tenant]) -> String {
    if tenants.is_empty() {
        return "No tenants found.".to_string();
    }

    // Calculate column widths
    let ref_width = tenants
        .iter()
        .map(|t| t.reference.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let name_width = tenants
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<ref_width$}  {:<name_width$}  {:<10}  {:<8}  {}\n",
        "Ref",
        "Name",
        "DOB",
        "Room",
        "HB",
        ref_width = ref_width,
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<ref_width$}  {:-<name_width$}  {:-<10}  {:-<8}  {:-<3}\n",
        "",
        "",
        "",
        "",
        "",
        ref_width = ref_width,
        name_width = name_width,
    ));

    // Tenant rows
    for tenant in tenants {
        output.push_str(&format!(
            "{:<ref_width$}  {:<name_width$}  {:<10}  {:<8}  {}\n",
            tenant.reference,
            tenant.name,
            tenant.dob.format("%Y-%m-%d").to_string(),
            tenant.room,
            if tenant.hb { "Yes" } else { "No" },
            ref_width = ref_width,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single tenant's details
pub fn format_tenant_details(tenant: &Tenant) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tenant: {}\n", tenant.name));
    output.push_str(&format!("  Reference:      {}\n", tenant.reference));
    output.push_str(&format!("  ID:             {}\n", tenant.id));
    output.push_str(&format!("  Date of Birth:  {}\n", tenant.dob));
    if !tenant.gender.is_empty() {
        output.push_str(&format!("  Gender:         {}\n", tenant.gender));
    }
    if !tenant.room.is_empty() {
        output.push_str(&format!("  Room:           {}\n", tenant.room));
    }
    output.push_str(&format!(
        "  Housing Benefit: {}\n",
        if tenant.hb { "Yes" } else { "No" }
    ));

    if !tenant.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", tenant.notes));
    }

    output.push('\n');
    output.push_str(&format!("  Created:  {}\n", format_epoch(tenant.creation)));
    output.push_str(&format!(
        "  Modified: {}\n",
        format_epoch(tenant.modification)
    ));

    output
}

fn format_epoch(seconds: i64) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => seconds.to_string(),
    }
}
