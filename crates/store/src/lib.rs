//! In-memory order and customer store.
//!
//! This crate is the order-retrieval collaborator of the report engine. It
//! keeps the collaborator's contract - soft-deleted orders excluded,
//! quantities pre-validated, inclusive date-range filtering - behind an
//! explicitly constructed store instance that is injected where needed,
//! never a module-level singleton.

pub mod error;
pub mod memory;
pub mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use types::{Customer, OrderRecord};
