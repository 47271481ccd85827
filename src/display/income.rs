//! Income display formatting

use crate::models::money::format_with_symbol;
use crate::models::Income;

/// Format a list of income records as a table
pub fn format_income_list(incomes: &[Income], symbol: &str) -> String {
    if incomes.is_empty() {
        return "No income records found.".to_string();
    }

    let desc_width = incomes
        .iter()
        .map(|i| i.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<12}  {:<8}  {:<16}  {:<desc_width$}  {:<10}  {:<10}  {:>12}\n",
        "ID",
        "Arrived",
        "Tenant",
        "Category",
        "Description",
        "From",
        "To",
        "Amount",
        desc_width = desc_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<12}  {:-<8}  {:-<16}  {:-<desc_width$}  {:-<10}  {:-<10}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
    ));

    for income in incomes {
        let from = income
            .from_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let to = income
            .to_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<12}  {:<12}  {:<8}  {:<16}  {:<desc_width$}  {:<10}  {:<10}  {:>12}\n",
            income.id.to_string(),
            income.arrived_date.format("%Y-%m-%d").to_string(),
            income.tenant_ref,
            income.category.name(),
            income.description,
            from,
            to,
            format_with_symbol(income.amount, symbol),
            desc_width = desc_width,
        ));
    }

    // Total row
    let total: f64 = incomes.iter().map(|i| i.amount).sum();
    output.push_str(&format!(
        "{:-<12}  {:-<12}  {:-<8}  {:-<16}  {:-<desc_width$}  {:-<10}  {:-<10}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
    ));
    output.push_str(&format!(
        "{:<12}  {:<12}  {:<8}  {:<16}  {:<desc_width$}  {:<10}  {:<10}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        "",
        "",
        "",
        format_with_symbol(total, symbol),
        desc_width = desc_width,
    ));

    output
}

/// Format a single income record's details
pub fn format_income_details(income: &Income, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income: {} for {}\n",
        income.category, income.tenant_ref
    ));
    output.push_str(&format!("  ID:        {}\n", income.id));
    output.push_str(&format!("  Arrived:   {}\n", income.arrived_date));
    output.push_str(&format!(
        "  Amount:    {}\n",
        format_with_symbol(income.amount, symbol)
    ));

    if let (Some(from), Some(to)) = (income.from_date, income.to_date) {
        output.push_str(&format!("  Covers:    {} to {}\n", from, to));
    }

    if !income.description.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Description: {}\n", income.description));
    }

    output
}
