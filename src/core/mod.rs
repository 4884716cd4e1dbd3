//! Core signup types, step schemas, and lookup tables.
//!
//! This module provides the strongly-typed form record accumulated across
//! the wizard steps, the per-step validation schemas, and the static
//! lookup tables (bank codes, federal units, dial codes).

mod error;
mod types;
mod validation;

pub mod banks;
pub mod dial_codes;
pub mod uf;

pub use banks::{bank_name, is_known_bank_code};
pub use dial_codes::{dial_code_label, is_known_dial_code};
pub use error::*;
pub use types::*;
pub use uf::{is_known_uf, uf_name};
pub use validation::*;
