#![cfg(feature = "wizard")]

use cadastro::core::*;
use cadastro::referral::InMemoryDirectory;
use cadastro::wizard::*;

fn credentials() -> Credentials {
    Credentials {
        email: "test@x.com".into(),
        password: "Abc12345!".into(),
        password_confirm: "Abc12345!".into(),
        accepted_terms: true,
    }
}

fn personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "Maria".into(),
        surname: "Souza".into(),
        dial_code: "55".into(),
        phone: "(11) 98765-4321".into(),
        document_kind: DocumentKind::Cpf,
        document: "529.982.247-25".into(),
        referrer_id: None,
    }
}

fn address() -> AddressInfo {
    AddressInfo {
        cep: "01310-100".into(),
        street: "Avenida Paulista".into(),
        number: "1000".into(),
        complement: Some("Sala 21".into()),
        neighborhood: "Bela Vista".into(),
        city: "São Paulo".into(),
        state: "SP".into(),
    }
}

fn bank() -> BankInfo {
    BankInfo {
        bank_code: "341".into(),
        account_kind: AccountKind::Corrente,
        agency: "1234".into(),
        account: "56789".into(),
        account_digit: "0".into(),
        pix_key: "maria@exemplo.com".into(),
        pix_key_kind: PixKeyKind::Email,
    }
}

fn artifact(name: &str) -> Artifact {
    Artifact::new(name, vec![0xFF, 0xD8, 0xFF])
}

/// Drive a fresh wizard through steps 1–4.
fn at_documents_step() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.submit_credentials(credentials()).unwrap();
    wizard.submit_personal(personal()).unwrap();
    wizard.submit_address(address()).unwrap();
    wizard.submit_bank(bank()).unwrap();
    assert_eq!(wizard.step(), Step::Documents);
    wizard
}

// ---------------------------------------------------------------------------
// Forward gating
// ---------------------------------------------------------------------------

#[test]
fn password_confirm_mismatch_blocks_step_one() {
    let mut wizard = Wizard::new();
    let mut input = credentials();
    input.password_confirm = "Abc12345?".into();

    let rejection = wizard.submit_credentials(input).unwrap_err();
    let errors = rejection.field_errors();
    assert!(errors.iter().any(|e| e.field == "password_confirm"));
    assert_eq!(wizard.step(), Step::Credentials);
    assert!(wizard.record().credentials.is_none());
}

#[test]
fn invalid_cpf_blocks_step_two() {
    let mut wizard = Wizard::new();
    wizard.submit_credentials(credentials()).unwrap();

    let mut input = personal();
    input.document = "529.982.247-24".into();
    let rejection = wizard.submit_personal(input).unwrap_err();
    assert!(
        rejection
            .field_errors()
            .iter()
            .any(|e| e.field == "document")
    );
    assert_eq!(wizard.step(), Step::Personal);
}

#[test]
fn formatted_input_passes_schemas() {
    // Every formatted value above carries punctuation; schemas strip first.
    let wizard = at_documents_step();
    let stored = wizard.record().personal.as_ref().unwrap();
    assert_eq!(stored.formatted_document(), "529.982.247-25");
}

#[test]
fn out_of_order_input_rejected() {
    let mut wizard = Wizard::new();
    let rejection = wizard.submit_bank(bank()).unwrap_err();
    assert!(matches!(
        rejection,
        StepRejection::WrongStep {
            expected: Step::Banking,
            actual: Step::Credentials,
        }
    ));
}

// ---------------------------------------------------------------------------
// Backward navigation
// ---------------------------------------------------------------------------

#[test]
fn back_preserves_committed_email() {
    let mut wizard = Wizard::new();
    wizard.submit_credentials(credentials()).unwrap();
    assert_eq!(wizard.step(), Step::Personal);

    assert!(wizard.back());
    assert_eq!(wizard.step(), Step::Credentials);
    assert_eq!(
        wizard.record().credentials.as_ref().unwrap().email,
        "test@x.com"
    );
}

#[test]
fn recommit_after_back_overwrites() {
    let mut wizard = Wizard::new();
    wizard.submit_credentials(credentials()).unwrap();
    wizard.back();

    let mut input = credentials();
    input.email = "novo@x.com".into();
    wizard.submit_credentials(input).unwrap();

    assert_eq!(wizard.step(), Step::Personal);
    assert_eq!(
        wizard.record().credentials.as_ref().unwrap().email,
        "novo@x.com"
    );
}

#[test]
fn go_back_to_skips_several_steps() {
    let mut wizard = at_documents_step();
    assert!(wizard.go_back_to(Step::Personal));
    assert_eq!(wizard.step(), Step::Personal);
    // All four commits survive the jump.
    assert!(wizard.record().is_complete());
}

// ---------------------------------------------------------------------------
// Final submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_selfie_blocks_submission() {
    let mut wizard = at_documents_step();
    wizard.attach_artifact(ArtifactSlot::Front, artifact("rg-frente.jpg"));
    wizard.attach_artifact(ArtifactSlot::Back, artifact("rg-verso.jpg"));

    let err = wizard
        .finish(&AcceptAll, &mut DiscardStore)
        .await
        .unwrap_err();
    assert!(matches!(err, CadastroError::Artifact(_)));
    assert!(wizard.last_error().unwrap().contains("selfie"));
    assert_eq!(wizard.step(), Step::Documents);
    assert_eq!(wizard.status(), WizardStatus::Editing);
}

#[tokio::test]
async fn submission_failure_reverts_and_allows_retry() {
    let mut wizard = at_documents_step();
    wizard.attach_artifact(ArtifactSlot::Front, artifact("rg-frente.jpg"));
    wizard.attach_artifact(ArtifactSlot::Back, artifact("rg-verso.jpg"));
    wizard.attach_artifact(ArtifactSlot::Selfie, artifact("selfie.jpg"));

    let offline = RejectAll::new("backend offline");
    let err = wizard.finish(&offline, &mut DiscardStore).await.unwrap_err();
    assert!(matches!(err, CadastroError::Submission(_)));
    assert_eq!(wizard.status(), WizardStatus::Editing);
    assert!(wizard.last_error().unwrap().contains("backend offline"));

    // Same wizard, working collaborator: the retry goes through.
    wizard.finish(&AcceptAll, &mut DiscardStore).await.unwrap();
    assert_eq!(wizard.status(), WizardStatus::Submitted);
    assert!(wizard.last_error().is_none());
}

#[tokio::test]
async fn double_submission_rejected() {
    let mut wizard = at_documents_step();
    for (slot, name) in [
        (ArtifactSlot::Front, "f.jpg"),
        (ArtifactSlot::Back, "v.jpg"),
        (ArtifactSlot::Selfie, "s.jpg"),
    ] {
        wizard.attach_artifact(slot, artifact(name));
    }
    wizard.finish(&AcceptAll, &mut DiscardStore).await.unwrap();

    let err = wizard
        .finish(&AcceptAll, &mut DiscardStore)
        .await
        .unwrap_err();
    assert!(matches!(err, CadastroError::Submission(_)));

    // Data entry is closed too.
    let rejection = wizard.submit_credentials(credentials()).unwrap_err();
    assert!(matches!(rejection, StepRejection::Finished));
    assert!(!wizard.back());
}

#[tokio::test]
async fn finish_requires_last_step() {
    let mut wizard = Wizard::new();
    wizard.submit_credentials(credentials()).unwrap();
    let err = wizard
        .finish(&AcceptAll, &mut DiscardStore)
        .await
        .unwrap_err();
    assert!(matches!(err, CadastroError::Validation(_)));
    assert_eq!(wizard.step(), Step::Personal);
}

// ---------------------------------------------------------------------------
// Referral attribution inside the wizard
// ---------------------------------------------------------------------------

#[test]
fn inbound_ref_pins_referrer_id() {
    let directory = InMemoryDirectory::with_demo_referrers();
    let mut wizard = Wizard::from_entry_query("?ref=2", &directory);
    assert!(wizard.manual_selection_suppressed());

    wizard.submit_credentials(credentials()).unwrap();
    // The input claims another referrer; the inbound code wins.
    let mut input = personal();
    input.referrer_id = Some("4".into());
    wizard.submit_personal(input).unwrap();

    assert_eq!(
        wizard.record().personal.as_ref().unwrap().referrer_id,
        Some("2".into())
    );
}

#[test]
fn manual_selection_fills_empty_referrer_id() {
    let directory = InMemoryDirectory::with_demo_referrers();
    let mut wizard = Wizard::new();
    wizard.select_referrer("3", &directory).unwrap();

    wizard.submit_credentials(credentials()).unwrap();
    wizard.submit_personal(personal()).unwrap();

    assert_eq!(
        wizard.record().personal.as_ref().unwrap().referrer_id,
        Some("3".into())
    );
    assert!(matches!(
        wizard.referral_source(),
        ReferralSource::Manual(r) if r.name == "Carlos Oliveira"
    ));
}

#[test]
fn select_referrer_refused_when_inbound() {
    let directory = InMemoryDirectory::with_demo_referrers();
    let mut wizard = Wizard::from_entry_query("ref=1", &directory);
    assert!(wizard.select_referrer("2", &directory).is_err());
    assert!(matches!(
        wizard.referral_source(),
        ReferralSource::Inbound(r) if r.name == "João Silva"
    ));
}
