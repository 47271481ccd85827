//! Reports module for RentLedger
//!
//! Provides the rent payment reconciliation report and the week-window
//! calculations it is built on.

pub mod rent_payment;
pub mod week;

pub use rent_payment::{
    calculate_subtotal_incomes, calculate_total_groups, calculate_total_rents,
    filter_incomes_by_window, filter_rents_by_window, total_income_amount, RentPaymentParams,
    RentPaymentReport, RentTotals,
};
pub use week::{parse_date, week_starts, week_window, week_window_or_today, WeekWindow};
