//! # cadastro
//!
//! Signup engine for a lottery affiliate program: CPF/CNPJ document
//! validation, per-step form schemas, a five-step wizard state machine,
//! referral resolution, and client-local submission summaries.
//!
//! The crate holds the *logic* of the signup flow. Rendering, routing and
//! styling belong to whatever front end embeds it.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//! use cadastro::documento::{format_cpf, validate_cpf};
//! use cadastro::wizard::Wizard;
//!
//! assert!(validate_cpf("52998224725"));
//! assert_eq!(format_cpf("52998224725"), "529.982.247-25");
//!
//! let mut wizard = Wizard::new();
//! wizard
//!     .submit_credentials(Credentials {
//!         email: "afiliado@exemplo.com".into(),
//!         password: "Abc12345!".into(),
//!         password_confirm: "Abc12345!".into(),
//!         accepted_terms: true,
//!     })
//!     .unwrap();
//! assert_eq!(wizard.step().number(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Form types, step schemas, CPF/CNPJ validators, lookup tables |
//! | `wizard` (default) | Five-step state machine and submission flow |
//! | `referral` (default) | Referrer directory and entry ref-code parsing |
//! | `persist` | In-memory JSON summary store |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod documento;

#[cfg(feature = "referral")]
pub mod referral;

#[cfg(feature = "wizard")]
pub mod wizard;

#[cfg(feature = "persist")]
pub mod persist;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
