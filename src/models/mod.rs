//! Core data models for rentledger
//!
//! This module contains all the data structures that represent the tenancy
//! domain: tenants, rooms, weekly rent charges and income records.

pub mod ids;
pub mod income;
pub mod money;
pub mod rent;
pub mod room;
pub mod tenant;

pub use ids::{IncomeId, RentId, RoomId, TenantId};
pub use income::{Income, IncomeCategory};
pub use rent::Rent;
pub use room::Room;
pub use tenant::Tenant;
