//! Core business logic for Waybill.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `charges` - Per-line charge financial calculation
//! - `currency` - Currency codes and USD/AED conversion
//! - `orders` - Order input types and validation rules
//! - `reports` - Order summary aggregation and report rendering

pub mod charges;
pub mod currency;
pub mod orders;
pub mod reports;
