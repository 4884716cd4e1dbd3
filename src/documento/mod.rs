//! CPF/CNPJ checksum validation and display formatting.
//!
//! Validators take an already-stripped digit string (the step schemas do
//! the stripping) and never panic; formatters strip for themselves and are
//! idempotent, so they can run on every keystroke.
//!
//! # Example
//!
//! ```rust
//! use cadastro::documento::*;
//!
//! assert!(validate_cpf("52998224725"));
//! assert!(!validate_cpf("11111111111")); // repeated digits
//!
//! assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! ```

mod cnpj;
mod cpf;
mod format;

pub use cnpj::{format_cnpj, validate_cnpj};
pub use cpf::{format_cpf, validate_cpf};
pub use format::{format_cep, format_phone, strip_digits};

use crate::core::DocumentKind;

/// Validate a stripped digit string against the given document kind.
pub fn validate_document(kind: DocumentKind, digits: &str) -> bool {
    match kind {
        DocumentKind::Cpf => validate_cpf(digits),
        DocumentKind::Cnpj => validate_cnpj(digits),
    }
}

/// Format a raw or punctuated value in the display form of `kind`.
pub fn format_document(kind: DocumentKind, value: &str) -> String {
    match kind {
        DocumentKind::Cpf => format_cpf(value),
        DocumentKind::Cnpj => format_cnpj(value),
    }
}
