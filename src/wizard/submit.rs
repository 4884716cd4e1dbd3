//! Submission payload assembly and the two collaborator seams.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::SignupRecord;

/// Key under which the client-local summary is persisted.
pub const SUMMARY_KEY: &str = "cadastroData";

/// File names of the three uploaded artifacts, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNames {
    /// Front of the identity document.
    pub frente: String,
    /// Back of the identity document.
    pub verso: String,
    /// Selfie holding the document.
    pub selfie: String,
}

/// Everything sent to the backend on final submission.
///
/// The wire contract is deliberately undefined here — the crate ships no
/// HTTP client. A backend integration implements [`SubmissionClient`] and
/// decides endpoint, encoding and error mapping itself.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    /// The accumulated record from steps 1–4.
    pub record: SignupRecord,
    /// Artifact file names, in slot order: front, back, selfie.
    pub documentos: ArtifactNames,
    /// Raw artifact bytes, in the same order.
    pub artifact_bytes: [Vec<u8>; 3],
}

/// Client-local summary written before navigating to the confirmation
/// page. Carries artifact *names*, never bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionSummary {
    /// The accumulated record from steps 1–4.
    pub record: SignupRecord,
    /// Artifact file names keyed by slot.
    pub documentos: ArtifactNames,
    /// When the submission was assembled.
    pub submitted_at: DateTime<Utc>,
}

/// Error from the submission collaborator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SubmitError {
    /// The backend refused the signup.
    Rejected(String),
    /// The backend could not be reached or did not answer in time.
    Unavailable(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "cadastro rejeitado: {e}"),
            Self::Unavailable(e) => write!(f, "envio indisponível: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error writing the client-local summary.
#[derive(Debug, Clone)]
pub struct StoreError {
    /// The key being written.
    pub key: String,
    /// Why the write failed.
    pub reason: String,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to store '{}': {}", self.key, self.reason)
    }
}

impl std::error::Error for StoreError {}

/// Backend seam for the final submission.
pub trait SubmissionClient {
    /// Send the assembled payload. The wizard awaits this once and never
    /// cancels it.
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Client-local persistence seam for the submission summary.
pub trait SummaryStore {
    /// Write `summary` under `key`.
    fn put(&mut self, key: &str, summary: &SubmissionSummary) -> Result<(), StoreError>;
}

/// Submission double that accepts every payload without touching the
/// network. Used by tests and demos; real deployments implement
/// [`SubmissionClient`] against their backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SubmissionClient for AcceptAll {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        Ok(())
    }
}

/// Submission double that fails every payload with a fixed reason.
#[derive(Debug, Clone)]
pub struct RejectAll {
    /// Reason returned on every call.
    pub reason: String,
}

impl RejectAll {
    /// Reject with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SubmissionClient for RejectAll {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        Err(SubmitError::Unavailable(self.reason.clone()))
    }
}

/// Store double that drops every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardStore;

impl SummaryStore for DiscardStore {
    fn put(&mut self, _key: &str, _summary: &SubmissionSummary) -> Result<(), StoreError> {
        Ok(())
    }
}
