use super::error::ValidationError;
use super::types::*;
use super::{banks, dial_codes, uf};
use crate::documento;

/// Minimum password length (step 1).
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate step 1 (credentials).
/// Returns all validation errors found (not just the first).
pub fn validate_credentials(credentials: &Credentials) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_plausible_email(&credentials.email) {
        errors.push(ValidationError::new("email", "e-mail inválido"));
    }

    password_strength_errors(&credentials.password, &mut errors);

    if credentials.password_confirm != credentials.password {
        errors.push(ValidationError::new(
            "password_confirm",
            "as senhas não coincidem",
        ));
    }

    if !credentials.accepted_terms {
        errors.push(ValidationError::new(
            "accepted_terms",
            "é preciso aceitar os termos e condições",
        ));
    }

    errors
}

/// Validate step 2 (personal identity).
///
/// Phone and document values may arrive in display form; digits are
/// stripped here before the structural checks, so the checksum validators
/// themselves only ever see bare digit strings.
pub fn validate_personal(personal: &PersonalInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if personal.first_name.trim().chars().count() < 3 {
        errors.push(ValidationError::new(
            "first_name",
            "nome deve ter pelo menos 3 caracteres",
        ));
    }

    if personal.surname.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "surname",
            "sobrenome deve ter pelo menos 2 caracteres",
        ));
    }

    if !dial_codes::is_known_dial_code(&personal.dial_code) {
        errors.push(ValidationError::new("dial_code", "DDI desconhecido"));
    }

    if documento::strip_digits(&personal.phone).len() < 10 {
        errors.push(ValidationError::new("phone", "telefone inválido"));
    }

    let digits = documento::strip_digits(&personal.document);
    if digits.len() != personal.document_kind.digit_len()
        || !documento::validate_document(personal.document_kind, &digits)
    {
        errors.push(ValidationError::new("document", "documento inválido"));
    }

    errors
}

/// Validate step 3 (address).
pub fn validate_address(address: &AddressInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if documento::strip_digits(&address.cep).len() != 8 {
        errors.push(ValidationError::new("cep", "CEP inválido"));
    }

    if address.street.trim().chars().count() < 3 {
        errors.push(ValidationError::new("street", "logradouro é obrigatório"));
    }

    if address.number.trim().is_empty() {
        errors.push(ValidationError::new("number", "número é obrigatório"));
    }

    if address.neighborhood.trim().chars().count() < 2 {
        errors.push(ValidationError::new("neighborhood", "bairro é obrigatório"));
    }

    if address.city.trim().chars().count() < 2 {
        errors.push(ValidationError::new("city", "cidade é obrigatória"));
    }

    if !uf::is_known_uf(&address.state) {
        errors.push(ValidationError::new("state", "estado inválido"));
    }

    errors
}

/// Validate step 4 (banking and payout data).
pub fn validate_bank(bank: &BankInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !banks::is_known_bank_code(&bank.bank_code) {
        errors.push(ValidationError::new("bank_code", "banco desconhecido"));
    }

    let agency = documento::strip_digits(&bank.agency);
    if agency.len() < 4 {
        errors.push(ValidationError::new("agency", "agência inválida"));
    }

    let account = documento::strip_digits(&bank.account);
    if account.len() < 5 {
        errors.push(ValidationError::new("account", "conta inválida"));
    }

    if bank.account_digit.chars().count() != 1 {
        errors.push(ValidationError::new("account_digit", "dígito inválido"));
    }

    if bank.pix_key.trim().is_empty() {
        errors.push(ValidationError::new("pix_key", "chave PIX é obrigatória"));
    } else {
        validate_pix_key(&bank.pix_key, bank.pix_key_kind, &mut errors);
    }

    errors
}

/// Shape-check a Pix key against its declared kind.
fn validate_pix_key(key: &str, kind: PixKeyKind, errors: &mut Vec<ValidationError>) {
    let ok = match kind {
        PixKeyKind::Cpf => documento::validate_cpf(&documento::strip_digits(key)),
        PixKeyKind::Cnpj => documento::validate_cnpj(&documento::strip_digits(key)),
        PixKeyKind::Email => is_plausible_email(key),
        PixKeyKind::Telefone => documento::strip_digits(key).len() >= 10,
        // EVP keys are 32 hex digits, optionally UUID-hyphenated.
        PixKeyKind::Aleatoria => {
            let bare: String = key.chars().filter(|c| *c != '-').collect();
            bare.len() == 32 && bare.chars().all(|c| c.is_ascii_hexdigit())
        }
    };
    if !ok {
        errors.push(ValidationError::new(
            "pix_key",
            "chave PIX não corresponde ao tipo informado",
        ));
    }
}

/// Cheap structural e-mail check: one `@`, non-empty local part, and a
/// dotted domain. Deliverability is the backend's problem.
///
/// Whitespace anywhere — padding included — is rejected: the value
/// validated here is committed to the record verbatim, so it must already
/// be in storable form.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

fn password_strength_errors(password: &str, errors: &mut Vec<ValidationError>) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(ValidationError::new(
            "password",
            "senha deve ter pelo menos 8 caracteres",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationError::new(
            "password",
            "senha deve conter pelo menos uma letra maiúscula",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(ValidationError::new(
            "password",
            "senha deve conter pelo menos uma letra minúscula",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            "password",
            "senha deve conter pelo menos um número",
        ));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push(ValidationError::new(
            "password",
            "senha deve conter pelo menos um caractere especial",
        ));
    }
}
