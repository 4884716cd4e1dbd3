//! Five-step signup wizard state machine.
//!
//! The wizard owns the accumulated [`SignupRecord`](crate::core::SignupRecord),
//! the uploaded artifact slots, and the current position. Forward
//! transitions are gated by the step schemas in [`crate::core`]; backward
//! navigation is unconditional and never discards committed data. The
//! final submission talks to two capability seams — [`SubmissionClient`]
//! for the backend send and [`SummaryStore`] for the client-local summary.
//!
//! # Example
//!
//! ```rust
//! use cadastro::core::*;
//! use cadastro::wizard::{Step, Wizard};
//!
//! let mut wizard = Wizard::new();
//! assert_eq!(wizard.step(), Step::Credentials);
//!
//! let rejected = wizard.submit_credentials(Credentials {
//!     email: "afiliado@exemplo.com".into(),
//!     password: "Abc12345!".into(),
//!     password_confirm: "outra".into(),
//!     accepted_terms: true,
//! });
//! assert!(rejected.is_err());
//! assert_eq!(wizard.step(), Step::Credentials); // still gated
//! ```

mod artifact;
mod machine;
mod step;
mod submit;

pub use artifact::{Artifact, ArtifactSet, ArtifactSlot};
pub use machine::{ReferralSource, StepRejection, Wizard, WizardStatus};
pub use step::Step;
pub use submit::{
    AcceptAll, ArtifactNames, DiscardStore, RejectAll, StoreError, SubmissionClient,
    SubmissionPayload, SubmissionSummary, SubmitError, SummaryStore, SUMMARY_KEY,
};
