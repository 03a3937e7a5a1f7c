//! Currency codes and conversion between USD and AED.

pub mod code;
pub mod convert;

pub use code::{Currency, CurrencyError};
pub use convert::{USD_TO_AED, convert};
