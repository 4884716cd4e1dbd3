use cadastro::core::*;
use cadastro::persist::MemoryStore;
use cadastro::referral::InMemoryDirectory;
use cadastro::wizard::*;

#[tokio::main]
async fn main() -> Result<(), CadastroError> {
    let directory = InMemoryDirectory::with_demo_referrers();

    // Entry link carried ?ref=2 — the referrer is pinned
    let mut wizard = Wizard::from_entry_query("?ref=2", &directory);
    if let ReferralSource::Inbound(referrer) = wizard.referral_source() {
        println!("Indicado por: {} ({})", referrer.name, referrer.kind.label());
    }

    // Step 1 — a password typo is caught and the wizard stays put
    let rejected = wizard.submit_credentials(Credentials {
        email: "afiliado@exemplo.com".into(),
        password: "Abc12345!".into(),
        password_confirm: "Abc12345?".into(),
        accepted_terms: true,
    });
    if let Err(rejection) = rejected {
        println!("Passo 1 bloqueado:");
        for error in rejection.field_errors() {
            println!("  {error}");
        }
    }

    wizard
        .submit_credentials(Credentials {
            email: "afiliado@exemplo.com".into(),
            password: "Abc12345!".into(),
            password_confirm: "Abc12345!".into(),
            accepted_terms: true,
        })
        .map_err(|e| CadastroError::Validation(e.to_string()))?;

    // Step 2 — formatted input is fine, the schema strips punctuation
    wizard
        .submit_personal(PersonalInfo {
            first_name: "Maria".into(),
            surname: "Souza".into(),
            dial_code: "55".into(),
            phone: "(11) 98765-4321".into(),
            document_kind: DocumentKind::Cpf,
            document: "529.982.247-25".into(),
            referrer_id: None,
        })
        .map_err(|e| CadastroError::Validation(e.to_string()))?;

    wizard
        .submit_address(AddressInfo {
            cep: "01310-100".into(),
            street: "Avenida Paulista".into(),
            number: "1000".into(),
            complement: None,
            neighborhood: "Bela Vista".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        })
        .map_err(|e| CadastroError::Validation(e.to_string()))?;

    wizard
        .submit_bank(BankInfo {
            bank_code: "341".into(),
            account_kind: AccountKind::Corrente,
            agency: "1234".into(),
            account: "56789".into(),
            account_digit: "0".into(),
            pix_key: "529.982.247-25".into(),
            pix_key_kind: PixKeyKind::Cpf,
        })
        .map_err(|e| CadastroError::Validation(e.to_string()))?;

    println!("Chegou ao passo {}: {}", wizard.step().number(), wizard.step().title());

    // Step 5 — uploads, then final submission
    wizard.attach_artifact(ArtifactSlot::Front, Artifact::new("rg-frente.jpg", vec![0xFF, 0xD8]));
    wizard.attach_artifact(ArtifactSlot::Back, Artifact::new("rg-verso.jpg", vec![0xFF, 0xD8]));
    wizard.attach_artifact(ArtifactSlot::Selfie, Artifact::new("selfie.jpg", vec![0xFF, 0xD8]));

    let mut store = MemoryStore::new();
    wizard.finish(&AcceptAll, &mut store).await?;
    println!("Status: {:?}", wizard.status());

    if let Some(json) = store.raw(SUMMARY_KEY) {
        println!("Resumo em '{SUMMARY_KEY}': {json}");
    }
    Ok(())
}
