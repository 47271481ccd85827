//! Service layer for RentLedger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging, and cross-entity operations.

pub mod income;
pub mod rent;
pub mod room;
pub mod tenant;

pub use income::IncomeService;
pub use rent::RentService;
pub use room::RoomService;
pub use tenant::TenantService;
