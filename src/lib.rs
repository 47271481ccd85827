//! RentLedger - Terminal-based tenancy and rent reconciliation ledger
//!
//! This library provides the core functionality for the RentLedger
//! application. It tracks the tenants and rooms of a shared property, the
//! weekly rent charges raised against each tenant and the incomes received
//! for them, and reconciles the two over week-aligned date windows.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (tenants, rooms, rents, incomes)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Rent payment reconciliation report
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use rentledger::config::{paths::LedgerPaths, settings::Settings};
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
