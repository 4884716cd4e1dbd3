//! Client-local persistence for the submission summary.
//!
//! After a successful submission the wizard writes a JSON summary under
//! [`SUMMARY_KEY`](crate::wizard::SUMMARY_KEY) so the confirmation page can
//! render it without another round trip. This module ships the in-memory
//! reference store; embedders back [`SummaryStore`](crate::wizard::SummaryStore)
//! with whatever key-value storage their platform offers.

mod memory;

pub use memory::MemoryStore;
