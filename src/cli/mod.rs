//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod income;
pub mod rent;
pub mod report;
pub mod room;
pub mod tenant;

pub use audit::handle_audit_command;
pub use income::{handle_income_command, IncomeCommands};
pub use rent::{handle_rent_command, RentCommands};
pub use report::{handle_report_command, ReportCommands};
pub use room::{handle_room_command, RoomCommands};
pub use tenant::{handle_tenant_command, TenantCommands};
