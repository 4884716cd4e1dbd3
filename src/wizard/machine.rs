use std::fmt;

use chrono::Utc;

use crate::core::{
    AddressInfo, BankInfo, CadastroError, Credentials, PersonalInfo, SignupRecord,
    ValidationError, validate_address, validate_bank, validate_credentials, validate_personal,
};
use crate::referral::{Referrer, ReferrerDirectory, ref_code_from_query};

use super::artifact::{Artifact, ArtifactSet, ArtifactSlot};
use super::step::Step;
use super::submit::{
    ArtifactNames, SUMMARY_KEY, SubmissionClient, SubmissionPayload, SubmissionSummary,
    SummaryStore,
};

/// Lifecycle of a wizard instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStatus {
    /// Collecting input; forward/backward navigation allowed.
    #[default]
    Editing,
    /// The final submission is in flight. Transient.
    Submitting,
    /// Terminal — the signup went through.
    Submitted,
}

/// How the signup is attributed to a referrer, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralSource<'a> {
    /// No referrer involved.
    None,
    /// Carried in by the entry link; manual selection is suppressed.
    Inbound(&'a Referrer),
    /// Picked from the directory during step 2.
    Manual(&'a Referrer),
}

/// Why a forward transition was refused.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum StepRejection {
    /// The input belongs to a different step than the active one.
    WrongStep {
        /// Step the input belongs to.
        expected: Step,
        /// Step the wizard is actually at.
        actual: Step,
    },
    /// The step schema failed; the wizard did not move.
    Invalid(Vec<ValidationError>),
    /// The wizard already reached its terminal state.
    Finished,
}

impl StepRejection {
    /// Schema errors carried by [`StepRejection::Invalid`], if any.
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for StepRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongStep { expected, actual } => write!(
                f,
                "input belongs to step {} but wizard is at step {}",
                expected.number(),
                actual.number()
            ),
            Self::Invalid(errors) => {
                write!(f, "step blocked by {} validation error(s)", errors.len())
            }
            Self::Finished => write!(f, "signup already submitted"),
        }
    }
}

impl std::error::Error for StepRejection {}

/// The five-step signup wizard.
///
/// Owns the accumulated record, the artifact slots and the current
/// position. One instance serves one signup; there are no concurrent
/// writers.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    status: WizardStatus,
    record: SignupRecord,
    artifacts: ArtifactSet,
    referrer: Option<Referrer>,
    inbound_ref: bool,
    last_error: Option<String>,
}

impl Wizard {
    /// Fresh wizard at step 1 with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh wizard initialized from the entry page's query string.
    ///
    /// When the query carries a resolvable `ref` code, the referrer is
    /// pinned and manual selection is suppressed. An unknown code is
    /// silently ignored, matching the entry page behavior.
    pub fn from_entry_query(query: &str, directory: &impl ReferrerDirectory) -> Self {
        let mut wizard = Self::new();
        if let Some(code) = ref_code_from_query(query) {
            if let Some(referrer) = directory.lookup(&code) {
                wizard.referrer = Some(referrer.clone());
                wizard.inbound_ref = true;
            }
        }
        wizard
    }

    /// Active step. Always within steps 1–5, also after submission.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Lifecycle status.
    pub fn status(&self) -> WizardStatus {
        self.status
    }

    /// The accumulated record committed so far.
    pub fn record(&self) -> &SignupRecord {
        &self.record
    }

    /// Uploaded artifacts.
    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    /// Error surfaced by the last failed action, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the manual referrer list should be hidden.
    pub fn manual_selection_suppressed(&self) -> bool {
        self.inbound_ref
    }

    /// Current referral attribution.
    pub fn referral_source(&self) -> ReferralSource<'_> {
        match (&self.referrer, self.inbound_ref) {
            (Some(referrer), true) => ReferralSource::Inbound(referrer),
            (Some(referrer), false) => ReferralSource::Manual(referrer),
            (None, _) => ReferralSource::None,
        }
    }

    /// Pick a referrer from the directory (step 2's manual list).
    ///
    /// Refused when an inbound ref code already pinned the referrer —
    /// the two attribution paths are mutually exclusive.
    pub fn select_referrer(
        &mut self,
        id: &str,
        directory: &impl ReferrerDirectory,
    ) -> Result<(), CadastroError> {
        if self.inbound_ref {
            return Err(CadastroError::Validation(
                "referrer is pinned by the entry link".into(),
            ));
        }
        match directory.lookup(id) {
            Some(referrer) => {
                self.referrer = Some(referrer.clone());
                Ok(())
            }
            None => Err(CadastroError::Validation(format!(
                "unknown referrer id '{id}'"
            ))),
        }
    }

    /// Commit step 1. On success the wizard moves to step 2.
    pub fn submit_credentials(&mut self, input: Credentials) -> Result<(), StepRejection> {
        self.guard(Step::Credentials)?;
        self.commit(validate_credentials(&input), |wizard| {
            wizard.record.apply_credentials(input)
        })
    }

    /// Commit step 2. The referrer id carried by the record follows the
    /// attribution source: an inbound code always wins, a manual pick
    /// fills in when the input left it empty.
    pub fn submit_personal(&mut self, mut input: PersonalInfo) -> Result<(), StepRejection> {
        self.guard(Step::Personal)?;
        if self.inbound_ref || input.referrer_id.is_none() {
            input.referrer_id = self.referrer.as_ref().map(|r| r.id.clone());
        }
        self.commit(validate_personal(&input), |wizard| {
            wizard.record.apply_personal(input)
        })
    }

    /// Commit step 3.
    pub fn submit_address(&mut self, input: AddressInfo) -> Result<(), StepRejection> {
        self.guard(Step::Address)?;
        self.commit(validate_address(&input), |wizard| {
            wizard.record.apply_address(input)
        })
    }

    /// Commit step 4. On success the wizard reaches the upload step.
    pub fn submit_bank(&mut self, input: BankInfo) -> Result<(), StepRejection> {
        self.guard(Step::Banking)?;
        self.commit(validate_bank(&input), |wizard| {
            wizard.record.apply_bank(input)
        })
    }

    /// Move one step back. Unconditional — no validation, no data loss.
    /// Returns false at step 1 or once submission started.
    pub fn back(&mut self) -> bool {
        if self.status != WizardStatus::Editing {
            return false;
        }
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Jump back to any earlier step. Returns false for the current step,
    /// later steps, or once submission started.
    pub fn go_back_to(&mut self, step: Step) -> bool {
        if self.status != WizardStatus::Editing || step >= self.step {
            return false;
        }
        self.step = step;
        true
    }

    /// Place an uploaded file into a slot. Allowed at any point before
    /// the signup is submitted.
    pub fn attach_artifact(&mut self, slot: ArtifactSlot, artifact: Artifact) {
        if self.status == WizardStatus::Submitted {
            return;
        }
        self.artifacts.set(slot, artifact);
    }

    /// Final submission (step 5).
    ///
    /// Fails fast — without leaving step 5 — when an artifact slot is
    /// empty or an earlier step never committed. Otherwise the wizard
    /// enters [`WizardStatus::Submitting`], writes the client-local
    /// summary under [`SUMMARY_KEY`], and awaits the collaborator. A
    /// collaborator failure reverts to [`WizardStatus::Editing`] and
    /// surfaces the error through [`Wizard::last_error`].
    pub async fn finish<C, S>(&mut self, client: &C, store: &mut S) -> Result<(), CadastroError>
    where
        C: SubmissionClient,
        S: SummaryStore,
    {
        if self.status == WizardStatus::Submitted {
            return Err(CadastroError::Submission("signup already submitted".into()));
        }
        if self.step != Step::Documents {
            return Err(CadastroError::Validation(format!(
                "submission only possible at step 5, wizard is at step {}",
                self.step.number()
            )));
        }

        let missing = self.artifacts.missing();
        if !missing.is_empty() {
            let slots: Vec<&str> = missing.iter().map(|s| s.key()).collect();
            let message = format!(
                "envie todos os documentos necessários (faltando: {})",
                slots.join(", ")
            );
            self.last_error = Some(message.clone());
            return Err(CadastroError::Artifact(message));
        }

        if !self.record.is_complete() {
            return Err(CadastroError::Validation(
                "earlier steps never committed — wizard state is inconsistent".into(),
            ));
        }

        let documentos = self.artifact_names()?;
        let artifact_bytes = ArtifactSlot::ALL.map(|slot| {
            self.artifacts
                .get(slot)
                .map(|a| a.bytes.clone())
                .unwrap_or_default()
        });

        self.status = WizardStatus::Submitting;
        self.last_error = None;

        let summary = SubmissionSummary {
            record: self.record.clone(),
            documentos: documentos.clone(),
            submitted_at: Utc::now(),
        };
        if let Err(e) = store.put(SUMMARY_KEY, &summary) {
            self.status = WizardStatus::Editing;
            self.last_error = Some(e.to_string());
            return Err(CadastroError::Store(e.to_string()));
        }

        let payload = SubmissionPayload {
            record: self.record.clone(),
            documentos,
            artifact_bytes,
        };
        match client.submit(&payload).await {
            Ok(()) => {
                self.status = WizardStatus::Submitted;
                Ok(())
            }
            Err(e) => {
                self.status = WizardStatus::Editing;
                self.last_error = Some(e.to_string());
                Err(CadastroError::Submission(e.to_string()))
            }
        }
    }

    fn artifact_names(&self) -> Result<ArtifactNames, CadastroError> {
        let name = |slot: ArtifactSlot| {
            self.artifacts
                .get(slot)
                .map(|a| a.file_name.clone())
                .ok_or_else(|| CadastroError::Artifact(format!("slot '{}' vazio", slot.key())))
        };
        Ok(ArtifactNames {
            frente: name(ArtifactSlot::Front)?,
            verso: name(ArtifactSlot::Back)?,
            selfie: name(ArtifactSlot::Selfie)?,
        })
    }

    fn guard(&self, expected: Step) -> Result<(), StepRejection> {
        if self.status != WizardStatus::Editing {
            return Err(StepRejection::Finished);
        }
        if self.step != expected {
            return Err(StepRejection::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn commit(
        &mut self,
        errors: Vec<ValidationError>,
        apply: impl FnOnce(&mut Self),
    ) -> Result<(), StepRejection> {
        if !errors.is_empty() {
            return Err(StepRejection::Invalid(errors));
        }
        apply(self);
        self.last_error = None;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }
}
