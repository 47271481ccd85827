//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and detail views.

pub mod income;
pub mod rent;
pub mod room;
pub mod tenant;

pub use income::{format_income_details, format_income_list};
pub use rent::{format_rent_details, format_rent_list};
pub use room::{format_room_details, format_room_list};
pub use tenant::{format_tenant_details, format_tenant_list};
