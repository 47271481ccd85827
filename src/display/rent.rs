//! Rent display formatting
//!
//! Formats weekly rent charges for terminal output.

use crate::models::money::format_with_symbol;
use crate::models::Rent;

/// Format a list of rent charges as a table
pub fn format_rent_list(rents: &[Rent], symbol: &str) -> String {
    if rents.is_empty() {
        return "No rent records found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<12}  {:<8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>12}\n",
        "ID", "Week", "Tenant", "Rent Due", "Services", "Utilities", "Meals", "Extra", "Total",
    ));

    output.push_str(&format!(
        "{:-<13}  {:-<12}  {:-<8}  {:->10}  {:->10}  {:->10}  {:->10}  {:->10}  {:->12}\n",
        "", "", "", "", "", "", "", "", "",
    ));

    for rent in rents {
        output.push_str(&format!(
            "{:<13}  {:<12}  {:<8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>12}\n",
            rent.id.to_string(),
            rent.week_commence.format("%Y-%m-%d").to_string(),
            rent.tenant_ref,
            format_with_symbol(rent.rent_due, symbol),
            format_with_symbol(rent.services, symbol),
            format_with_symbol(rent.utilities, symbol),
            format_with_symbol(rent.meals, symbol),
            format_with_symbol(rent.extra, symbol),
            format_with_symbol(rent.total(), symbol),
        ));
    }

    // Total row
    let grand_total: f64 = rents.iter().map(|r| r.total()).sum();
    output.push_str(&format!(
        "{:-<13}  {:-<12}  {:-<8}  {:->10}  {:->10}  {:->10}  {:->10}  {:->10}  {:->12}\n",
        "", "", "", "", "", "", "", "", "",
    ));
    output.push_str(&format!(
        "{:<13}  {:<12}  {:<8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        format_with_symbol(grand_total, symbol),
    ));

    output
}

/// Format a single rent charge's details
pub fn format_rent_details(rent: &Rent, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Rent for {} week of {}\n",
        rent.tenant_ref, rent.week_commence
    ));
    output.push_str(&format!("  ID:         {}\n", rent.id));
    output.push('\n');
    output.push_str(&format!(
        "  Rent Due:   {}\n",
        format_with_symbol(rent.rent_due, symbol)
    ));
    output.push_str(&format!(
        "  Services:   {}\n",
        format_with_symbol(rent.services, symbol)
    ));
    output.push_str(&format!(
        "  Utilities:  {}\n",
        format_with_symbol(rent.utilities, symbol)
    ));
    output.push_str(&format!(
        "  Meals:      {}\n",
        format_with_symbol(rent.meals, symbol)
    ));
    output.push_str(&format!(
        "  Extra:      {}\n",
        format_with_symbol(rent.extra, symbol)
    ));
    output.push_str(&format!(
        "  Total:      {}\n",
        format_with_symbol(rent.total(), symbol)
    ));

    if !rent.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", rent.notes));
    }

    output
}
