//! Rent Payment Report
//!
//! Reconciles rent due against income received for a tenant over a
//! reporting window. The window is expanded to whole Monday-to-Sunday
//! weeks before any record is considered.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::money::{format_grouped, format_with_symbol};
use crate::models::{Income, IncomeCategory, Rent, Tenant, TenantId};
use crate::storage::Storage;

use super::week::{week_starts, week_window_or_today};

/// Query parameters for the rent payment report
#[derive(Debug, Clone)]
pub struct RentPaymentParams {
    /// Tenant the report covers
    pub tenant: TenantId,
    /// Lower bound of the reporting window
    pub from_date: Option<NaiveDate>,
    /// Upper bound of the reporting window
    pub to_date: Option<NaiveDate>,
    /// Whether to include per-category subtotals
    pub show_subtotal: bool,
}

/// Summed charges across a filtered rent list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RentTotals {
    pub rent_due: f64,
    pub services: f64,
    pub utilities: f64,
    pub meals: f64,
    pub extra: f64,
    /// Grand total across all five charge fields
    pub total: f64,
}

/// Filter rent records to the expanded reporting window
///
/// A record is kept when its `week_commence` lies between the Monday of
/// the week containing `from_date` and the Sunday of the week containing
/// `to_date`. Absent bounds resolve to the current week. Input order is
/// preserved and records are returned unchanged.
pub fn filter_rents_by_window(
    rents: &[Rent],
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
) -> Vec<Rent> {
    let begin_from = week_window_or_today(from_date).start;
    let end_to = week_window_or_today(to_date).end;

    rents
        .iter()
        .filter(|rent| begin_from <= rent.week_commence && rent.week_commence <= end_to)
        .cloned()
        .collect()
}

/// Filter income records to the expanded reporting window, prorating
/// housing benefit that straddles a calendar month boundary
///
/// Records whose span lies entirely inside the window keep their full
/// amount. A housing benefit record whose span crosses a month boundary
/// and overlaps the window is reduced to the fraction of its own weekly
/// markers that land on a week covered by the report. Everything else,
/// including records with no date span, is dropped.
pub fn filter_incomes_by_window(
    incomes: &[Income],
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
) -> LedgerResult<Vec<Income>> {
    let begin_from = week_window_or_today(from_date).start;
    let end_to = week_window_or_today(to_date).end;
    let weeks_included = week_starts(begin_from, end_to);

    let mut filtered = Vec::new();
    for income in incomes {
        let (ic_from, ic_to) = match (income.from_date, income.to_date) {
            (Some(from), Some(to)) => (from, to),
            // No temporal anchor, nothing to place in the window
            _ => continue,
        };

        if ic_from >= begin_from && ic_to <= end_to {
            filtered.push(income.clone());
        } else if ic_from.month() != ic_to.month()
            && income.category == IncomeCategory::HousingBenefit
            && ((begin_from <= ic_to && ic_to <= end_to)
                || (begin_from <= ic_from && ic_from <= end_to))
        {
            // Month numbers only; the year does not participate in the
            // comparison above.
            let weeks = week_starts(ic_from, ic_to);
            if weeks.is_empty() {
                return Err(LedgerError::EmptyWeekSpan {
                    from: ic_from,
                    to: ic_to,
                });
            }

            let t = weeks.iter().filter(|w| weeks_included.contains(w)).count();

            let mut adjusted = income.clone();
            adjusted.amount = income.amount / weeks.len() as f64 * t as f64;
            filtered.push(adjusted);
        }
    }

    Ok(filtered)
}

/// Sum the five charge fields across a rent list into named subtotals
/// plus a grand total
pub fn calculate_total_rents(rents: &[Rent]) -> RentTotals {
    let mut totals = RentTotals::default();
    for rent in rents {
        totals.rent_due += rent.rent_due;
        totals.services += rent.services;
        totals.utilities += rent.utilities;
        totals.meals += rent.meals;
        totals.extra += rent.extra;
        totals.total += rent.total();
    }
    totals
}

/// Group income records by category, keyed by category name
///
/// Groups come back in category-name order and members keep their
/// input order.
pub fn calculate_subtotal_incomes(incomes: &[Income]) -> BTreeMap<String, Vec<Income>> {
    let mut groups: BTreeMap<String, Vec<Income>> = BTreeMap::new();
    for income in incomes {
        groups
            .entry(income.category.name().to_string())
            .or_default()
            .push(income.clone());
    }
    groups
}

/// Sum each category group and format the total as a grouped
/// two-decimal string
pub fn calculate_total_groups(groups: &BTreeMap<String, Vec<Income>>) -> BTreeMap<String, String> {
    groups
        .iter()
        .map(|(name, members)| {
            let total: f64 = members.iter().map(|income| income.amount).sum();
            (name.clone(), format_grouped(total))
        })
        .collect()
}

/// Sum `amount` across an income list
pub fn total_income_amount(incomes: &[Income]) -> f64 {
    incomes.iter().map(|income| income.amount).sum()
}

/// Rent Payment Report
#[derive(Debug, Clone)]
pub struct RentPaymentReport {
    /// Tenant the report covers
    pub tenant: Tenant,
    /// Requested lower bound, as supplied
    pub from_date: Option<NaiveDate>,
    /// Requested upper bound, as supplied
    pub to_date: Option<NaiveDate>,
    /// Rent records inside the expanded window, in stored order
    pub rents: Vec<Rent>,
    /// Charge subtotals across the filtered rents
    pub total_rents: RentTotals,
    /// Income records inside the expanded window, proration applied
    pub incomes: Vec<Income>,
    /// Sum of the filtered income amounts
    pub total_amount: f64,
    /// Per-category income groups, when subtotals were requested
    pub groups: Option<BTreeMap<String, Vec<Income>>>,
    /// Formatted per-category totals, when subtotals were requested
    pub total_groups: Option<BTreeMap<String, String>>,
}

impl RentPaymentReport {
    /// Generate a rent payment report for a tenant and window
    pub fn generate(storage: &Storage, params: &RentPaymentParams) -> LedgerResult<Self> {
        let tenant = storage
            .tenants
            .get(params.tenant)?
            .ok_or_else(|| LedgerError::tenant_not_found(params.tenant.to_string()))?;

        let all_rents = storage.rents.get_by_tenant(&tenant.reference)?;
        let rents = filter_rents_by_window(&all_rents, params.from_date, params.to_date);
        let total_rents = calculate_total_rents(&rents);

        let all_incomes = storage.incomes.get_by_tenant(&tenant.reference)?;
        let incomes = filter_incomes_by_window(&all_incomes, params.from_date, params.to_date)?;
        let total_amount = total_income_amount(&incomes);

        let (groups, total_groups) = if params.show_subtotal {
            let groups = calculate_subtotal_incomes(&incomes);
            let total_groups = calculate_total_groups(&groups);
            (Some(groups), Some(total_groups))
        } else {
            (None, None)
        };

        Ok(Self {
            tenant,
            from_date: params.from_date,
            to_date: params.to_date,
            rents,
            total_rents,
            incomes,
            total_amount,
            groups,
            total_groups,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        let symbol = settings.currency_symbol.as_str();

        // Header
        output.push_str(&format!(
            "Rent Payment Report: {} ({})\n",
            self.tenant.name, self.tenant.reference
        ));
        let from = self
            .from_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "current week".to_string());
        let to = self
            .to_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "current week".to_string());
        output.push_str(&format!("Window: {} to {}\n", from, to));
        output.push_str(&"=".repeat(94));
        output.push('\n');

        // Rent table
        output.push_str("Rent charged\n");
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
            "Week Commencing", "Rent Due", "Services", "Utilities", "Meals", "Extra", "Total"
        ));
        output.push_str(&"-".repeat(94));
        output.push('\n');

        for rent in &self.rents {
            output.push_str(&format!(
                "{:<16} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
                rent.week_commence.to_string(),
                format_with_symbol(rent.rent_due, symbol),
                format_with_symbol(rent.services, symbol),
                format_with_symbol(rent.utilities, symbol),
                format_with_symbol(rent.meals, symbol),
                format_with_symbol(rent.extra, symbol),
                format_with_symbol(rent.total(), symbol)
            ));
        }

        output.push_str(&"-".repeat(94));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n\n",
            "Totals",
            format_with_symbol(self.total_rents.rent_due, symbol),
            format_with_symbol(self.total_rents.services, symbol),
            format_with_symbol(self.total_rents.utilities, symbol),
            format_with_symbol(self.total_rents.meals, symbol),
            format_with_symbol(self.total_rents.extra, symbol),
            format_with_symbol(self.total_rents.total, symbol)
        ));

        // Income table
        output.push_str("Income received\n");
        output.push_str(&format!(
            "{:<12} {:<16} {:<26} {:>12}\n",
            "Arrived", "Category", "Span", "Amount"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for income in &self.incomes {
            let span = match (income.from_date, income.to_date) {
                (Some(from), Some(to)) => format!("{} to {}", from, to),
                _ => "-".to_string(),
            };
            output.push_str(&format!(
                "{:<12} {:<16} {:<26} {:>12}\n",
                income.arrived_date.to_string(),
                income.category.to_string(),
                span,
                format_with_symbol(income.amount, symbol)
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Total income: {}\n",
            format_with_symbol(self.total_amount, symbol)
        ));

        // Subtotals
        if let (Some(groups), Some(total_groups)) = (&self.groups, &self.total_groups) {
            output.push('\n');
            output.push_str("Subtotals by category\n");
            for (name, members) in groups {
                let total = total_groups.get(name).cloned().unwrap_or_default();
                let noun = if members.len() == 1 { "record" } else { "records" };
                output.push_str(&format!(
                    "  {:<16} {:>12}  ({} {})\n",
                    name,
                    total,
                    members.len(),
                    noun
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        // Rent section
        writeln!(
            writer,
            "Week Commencing,Rent Due,Services,Utilities,Meals,Extra,Total"
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        for rent in &self.rents {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                rent.week_commence,
                rent.rent_due,
                rent.services,
                rent.utilities,
                rent.meals,
                rent.extra,
                rent.total()
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

        // Income section
        writeln!(writer, "Arrived,Category,From,To,Amount")
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for income in &self.incomes {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                income.arrived_date,
                income.category,
                income.from_date.map(|d| d.to_string()).unwrap_or_default(),
                income.to_date.map(|d| d.to_string()).unwrap_or_default(),
                income.amount
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        // Summary rows
        writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
        writeln!(writer, "SUMMARY,Total Rent,,,{:.2}", self.total_rents.total)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        writeln!(writer, "SUMMARY,Total Income,,,{:.2}", self.total_amount)
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn housing_benefit(amount: f64, from: NaiveDate, to: NaiveDate) -> Income {
        Income::with_span(
            "T1",
            "HB payment",
            amount,
            IncomeCategory::HousingBenefit,
            to,
            from,
            to,
        )
    }

    #[test]
    fn test_cross_month_span_fully_counted_when_all_weeks_covered() {
        // Two-week benefit from Mon 2025-01-27 to Mon 2025-02-09 crosses
        // the Jan/Feb boundary. A window of Feb 1 to Feb 9 expands to the
        // weeks of Jan 27 and Feb 3, covering both benefit weeks.
        let incomes = vec![housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9))];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 1)), Some(date(2025, 2, 9)))
                .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 700.0);
    }

    #[test]
    fn test_cross_month_span_prorated_when_half_covered() {
        // Same benefit, but the window starts on Feb 3 so only one of the
        // two benefit weeks is covered.
        let incomes = vec![housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9))];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 3)), Some(date(2025, 2, 9)))
                .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 350.0);
    }

    #[test]
    fn test_proration_is_linear() {
        let base = housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9));
        let mut scaled = base.clone();
        scaled.amount = base.amount * 3.0;

        let from = Some(date(2025, 2, 3));
        let to = Some(date(2025, 2, 9));

        let filtered_base = filter_incomes_by_window(&[base], from, to).unwrap();
        let filtered_scaled = filter_incomes_by_window(&[scaled], from, to).unwrap();

        assert_eq!(filtered_scaled[0].amount, filtered_base[0].amount * 3.0);
    }

    #[test]
    fn test_fully_contained_span_kept_whole_regardless_of_category() {
        let incomes = vec![
            Income::with_span(
                "T1",
                "weekly standing order",
                85.0,
                IncomeCategory::StandingOrder,
                date(2025, 2, 10),
                date(2025, 2, 3),
                date(2025, 2, 9),
            ),
            housing_benefit(140.0, date(2025, 2, 3), date(2025, 2, 9)),
        ];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 1)), Some(date(2025, 2, 16)))
                .unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].amount, 85.0);
        assert_eq!(filtered[1].amount, 140.0);
    }

    #[test]
    fn test_same_month_partial_span_excluded() {
        // Two weeks inside February, partially overlapping the window.
        // Without a month boundary the record is all-or-nothing, and it
        // is not fully contained here, so it drops out.
        let incomes = vec![housing_benefit(400.0, date(2025, 2, 3), date(2025, 2, 16))];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 10)), Some(date(2025, 2, 16)))
                .unwrap();

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_cross_month_non_housing_benefit_excluded() {
        let mut income = housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9));
        income.category = IncomeCategory::StandingOrder;

        let filtered =
            filter_incomes_by_window(&[income], Some(date(2025, 2, 3)), Some(date(2025, 2, 9)))
                .unwrap();

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_incomes_without_span_excluded() {
        let incomes = vec![
            Income::new(
                "T1",
                "refund",
                50.0,
                IncomeCategory::Refund,
                date(2025, 2, 5),
            ),
            Income::new(
                "T1",
                "donation",
                20.0,
                IncomeCategory::Donation,
                date(2025, 2, 6),
            ),
        ];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 1)), Some(date(2025, 2, 28)))
                .unwrap();

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_reversed_span_inside_window_passes_through_whole() {
        // A span stored backwards still satisfies the containment check
        // when both endpoints sit inside the expanded window, so it is
        // kept whole and never reaches the proration divide.
        let incomes = vec![housing_benefit(700.0, date(2025, 3, 10), date(2025, 2, 3))];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 2, 1)), Some(date(2025, 3, 31)))
                .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 700.0);
    }

    #[test]
    fn test_reversed_span_outside_window_is_skipped() {
        let incomes = vec![housing_benefit(700.0, date(2025, 3, 10), date(2025, 2, 3))];

        let filtered =
            filter_incomes_by_window(&incomes, Some(date(2025, 4, 14)), Some(date(2025, 4, 27)))
                .unwrap();

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let incomes = vec![housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9))];

        let _ = filter_incomes_by_window(&incomes, Some(date(2025, 2, 3)), Some(date(2025, 2, 9)))
            .unwrap();

        assert_eq!(incomes[0].amount, 700.0);
    }

    #[test]
    fn test_rent_included_via_expanded_window() {
        let rents = vec![Rent::with_charges(
            "T1",
            date(2025, 2, 3),
            100.0,
            10.0,
            5.0,
            0.0,
            0.0,
        )];

        let filtered =
            filter_rents_by_window(&rents, Some(date(2025, 2, 1)), Some(date(2025, 2, 28)));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].week_commence, date(2025, 2, 3));
    }

    #[test]
    fn test_rent_outside_expanded_window_excluded() {
        let rents = vec![
            Rent::new("T1", date(2025, 1, 20)),
            Rent::new("T1", date(2025, 2, 3)),
            Rent::new("T1", date(2025, 3, 10)),
        ];

        let filtered =
            filter_rents_by_window(&rents, Some(date(2025, 2, 1)), Some(date(2025, 2, 28)));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].week_commence, date(2025, 2, 3));
    }

    #[test]
    fn test_rent_filter_preserves_order() {
        let rents = vec![
            Rent::new("T1", date(2025, 2, 10)),
            Rent::new("T1", date(2025, 2, 3)),
            Rent::new("T1", date(2025, 2, 17)),
        ];

        let filtered =
            filter_rents_by_window(&rents, Some(date(2025, 2, 1)), Some(date(2025, 2, 28)));

        let weeks: Vec<NaiveDate> = filtered.iter().map(|r| r.week_commence).collect();
        assert_eq!(
            weeks,
            vec![date(2025, 2, 10), date(2025, 2, 3), date(2025, 2, 17)]
        );
    }

    #[test]
    fn test_rent_filter_defaults_to_current_week() {
        let monday = week_window_or_today(None).start;
        let rents = vec![
            Rent::new("T1", monday),
            Rent::new("T1", monday - chrono::Duration::days(70)),
        ];

        let filtered = filter_rents_by_window(&rents, None, None);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].week_commence, monday);
    }

    #[test]
    fn test_total_rents_sums_every_field() {
        let rents = vec![
            Rent::with_charges("T1", date(2025, 2, 3), 100.0, 10.0, 5.0, 20.0, 2.0),
            Rent::with_charges("T1", date(2025, 2, 10), 100.0, 10.0, 5.0, 20.0, 2.0),
        ];

        let totals = calculate_total_rents(&rents);

        assert_eq!(totals.rent_due, 200.0);
        assert_eq!(totals.services, 20.0);
        assert_eq!(totals.utilities, 10.0);
        assert_eq!(totals.meals, 40.0);
        assert_eq!(totals.extra, 4.0);
        assert_eq!(totals.total, 274.0);
    }

    #[test]
    fn test_total_rents_empty_list_is_zero() {
        let totals = calculate_total_rents(&[]);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let rents = vec![Rent::with_charges(
            "T1",
            date(2025, 2, 3),
            100.0,
            10.0,
            5.0,
            20.0,
            2.0,
        )];
        let incomes = vec![housing_benefit(140.0, date(2025, 2, 3), date(2025, 2, 9))];

        let first = calculate_total_rents(&rents);
        let second = calculate_total_rents(&rents);
        assert_eq!(first, second);

        let groups_first = calculate_subtotal_incomes(&incomes);
        let groups_second = calculate_subtotal_incomes(&incomes);
        assert_eq!(
            calculate_total_groups(&groups_first),
            calculate_total_groups(&groups_second)
        );
        assert_eq!(total_income_amount(&incomes), total_income_amount(&incomes));
    }

    #[test]
    fn test_grouping_sorted_by_name_and_loses_nothing() {
        let incomes = vec![
            Income::new("T1", "r1", 50.0, IncomeCategory::Refund, date(2025, 2, 5)),
            housing_benefit(140.0, date(2025, 2, 3), date(2025, 2, 9)),
            Income::new("T1", "d1", 20.0, IncomeCategory::Donation, date(2025, 2, 6)),
            Income::new("T1", "r2", 30.0, IncomeCategory::Refund, date(2025, 2, 7)),
        ];

        let groups = calculate_subtotal_incomes(&incomes);

        let names: Vec<&String> = groups.keys().collect();
        assert_eq!(names, vec!["Donation", "Housing Benefit", "Refund"]);

        let member_count: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(member_count, incomes.len());

        // Members keep input order within their group
        let refunds = &groups["Refund"];
        assert_eq!(refunds[0].description, "r1");
        assert_eq!(refunds[1].description, "r2");
    }

    #[test]
    fn test_total_groups_formats_grouped_amounts() {
        let mut big = housing_benefit(1234.5, date(2025, 2, 3), date(2025, 2, 9));
        big.description = "big".to_string();
        let groups = calculate_subtotal_incomes(&[big]);

        let totals = calculate_total_groups(&groups);

        assert_eq!(totals["Housing Benefit"], "1,234.50");
    }

    #[test]
    fn test_generate_report_with_subtotals() {
        let (_temp_dir, storage) = create_test_storage();

        let tenant = Tenant::new(
            "T1",
            "Alice Smith",
            date(1990, 5, 12),
            "female",
            "R1",
        );
        let tenant_id = tenant.id;
        storage.tenants.upsert(tenant).unwrap();

        storage
            .rents
            .upsert(Rent::with_charges(
                "T1",
                date(2025, 2, 3),
                100.0,
                0.0,
                0.0,
                0.0,
                0.0,
            ))
            .unwrap();

        storage
            .incomes
            .upsert(housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9)))
            .unwrap();

        let params = RentPaymentParams {
            tenant: tenant_id,
            from_date: Some(date(2025, 2, 3)),
            to_date: Some(date(2025, 2, 9)),
            show_subtotal: true,
        };

        let report = RentPaymentReport::generate(&storage, &params).unwrap();

        assert_eq!(report.rents.len(), 1);
        assert_eq!(report.total_rents.total, 100.0);
        assert_eq!(report.incomes.len(), 1);
        assert_eq!(report.total_amount, 350.0);

        let total_groups = report.total_groups.as_ref().unwrap();
        assert_eq!(total_groups["Housing Benefit"], "350.00");
    }

    #[test]
    fn test_generate_report_without_subtotals() {
        let (_temp_dir, storage) = create_test_storage();

        let tenant = Tenant::new("T1", "Alice Smith", date(1990, 5, 12), "female", "R1");
        let tenant_id = tenant.id;
        storage.tenants.upsert(tenant).unwrap();

        let params = RentPaymentParams {
            tenant: tenant_id,
            from_date: Some(date(2025, 2, 3)),
            to_date: Some(date(2025, 2, 9)),
            show_subtotal: false,
        };

        let report = RentPaymentReport::generate(&storage, &params).unwrap();

        assert!(report.groups.is_none());
        assert!(report.total_groups.is_none());
        assert_eq!(report.total_amount, 0.0);
    }

    #[test]
    fn test_generate_report_unknown_tenant() {
        let (_temp_dir, storage) = create_test_storage();

        let params = RentPaymentParams {
            tenant: TenantId::new(),
            from_date: None,
            to_date: None,
            show_subtotal: false,
        };

        let err = RentPaymentReport::generate(&storage, &params).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_generate_only_includes_requested_tenant() {
        let (_temp_dir, storage) = create_test_storage();

        let tenant = Tenant::new("T1", "Alice Smith", date(1990, 5, 12), "female", "R1");
        let tenant_id = tenant.id;
        storage.tenants.upsert(tenant).unwrap();

        storage.rents.upsert(Rent::new("T1", date(2025, 2, 3))).unwrap();
        storage.rents.upsert(Rent::new("T2", date(2025, 2, 3))).unwrap();

        let params = RentPaymentParams {
            tenant: tenant_id,
            from_date: Some(date(2025, 2, 1)),
            to_date: Some(date(2025, 2, 28)),
            show_subtotal: false,
        };

        let report = RentPaymentReport::generate(&storage, &params).unwrap();

        assert_eq!(report.rents.len(), 1);
        assert_eq!(report.rents[0].tenant_ref, "T1");
    }

    #[test]
    fn test_format_terminal_contains_totals() {
        let (_temp_dir, storage) = create_test_storage();

        let tenant = Tenant::new("T1", "Alice Smith", date(1990, 5, 12), "female", "R1");
        let tenant_id = tenant.id;
        storage.tenants.upsert(tenant).unwrap();

        storage
            .incomes
            .upsert(housing_benefit(700.0, date(2025, 1, 27), date(2025, 2, 9)))
            .unwrap();

        let params = RentPaymentParams {
            tenant: tenant_id,
            from_date: Some(date(2025, 2, 3)),
            to_date: Some(date(2025, 2, 9)),
            show_subtotal: true,
        };

        let report = RentPaymentReport::generate(&storage, &params).unwrap();
        let rendered = report.format_terminal(&Settings::default());

        assert!(rendered.contains("Alice Smith"));
        assert!(rendered.contains("Housing Benefit"));
        assert!(rendered.contains("£350.00"));
        assert!(rendered.contains("Subtotals by category"));
    }

    #[test]
    fn test_export_csv_sections() {
        let (_temp_dir, storage) = create_test_storage();

        let tenant = Tenant::new("T1", "Alice Smith", date(1990, 5, 12), "female", "R1");
        let tenant_id = tenant.id;
        storage.tenants.upsert(tenant).unwrap();

        storage
            .rents
            .upsert(Rent::with_charges(
                "T1",
                date(2025, 2, 3),
                100.0,
                0.0,
                0.0,
                0.0,
                0.0,
            ))
            .unwrap();

        let params = RentPaymentParams {
            tenant: tenant_id,
            from_date: Some(date(2025, 2, 1)),
            to_date: Some(date(2025, 2, 28)),
            show_subtotal: false,
        };

        let report = RentPaymentReport::generate(&storage, &params).unwrap();

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();

        assert!(csv_string.contains("Week Commencing,Rent Due"));
        assert!(csv_string.contains("2025-02-03,100.00"));
        assert!(csv_string.contains("Arrived,Category,From,To,Amount"));
        assert!(csv_string.contains("SUMMARY,Total Rent,,,100.00"));
    }
}
