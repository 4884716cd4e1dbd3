use serde::{Deserialize, Serialize};

/// Step 1 — identity credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Login e-mail address.
    pub email: String,
    /// Chosen password (stored in memory only until submission).
    pub password: String,
    /// Password confirmation — must match `password` exactly.
    pub password_confirm: String,
    /// Explicit acceptance of the terms and conditions.
    pub accepted_terms: bool,
}

/// Kind of national tax document carried by the signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// CPF — natural person, 11 digits.
    Cpf,
    /// CNPJ — legal entity, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Number of digits the document carries once punctuation is stripped.
    pub fn digit_len(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Input placeholder in display form.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Cpf => "000.000.000-00",
            Self::Cnpj => "00.000.000/0000-00",
        }
    }
}

/// Step 2 — personal identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// International dial code (e.g. "55").
    pub dial_code: String,
    /// Phone number; may arrive formatted or raw.
    pub phone: String,
    /// Which tax document `document` holds.
    pub document_kind: DocumentKind,
    /// Tax document value; may arrive formatted or raw.
    pub document: String,
    /// Referrer id chosen or carried in from the entry link.
    pub referrer_id: Option<String>,
}

impl PersonalInfo {
    /// Document in display form, reformatted from the raw digits.
    ///
    /// Re-entering the personal step must re-apply formatting rather than
    /// echo whatever was stored.
    pub fn formatted_document(&self) -> String {
        match self.document_kind {
            DocumentKind::Cpf => crate::documento::format_cpf(&self.document),
            DocumentKind::Cnpj => crate::documento::format_cnpj(&self.document),
        }
    }

    /// Phone in display form, reformatted from the raw digits.
    pub fn formatted_phone(&self) -> String {
        crate::documento::format_phone(&self.phone)
    }
}

/// Step 3 — postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressInfo {
    /// CEP postal code; may arrive formatted or raw.
    pub cep: String,
    /// Street (logradouro).
    pub street: String,
    /// House/building number, kept as text ("123", "s/n").
    pub number: String,
    /// Apartment, suite, etc.
    pub complement: Option<String>,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// Federal unit, 2-letter code (e.g. "SP").
    pub state: String,
}

/// Bank account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Conta corrente.
    Corrente,
    /// Conta poupança.
    Poupanca,
}

/// Kind of Pix payout key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    /// CPF of the account holder.
    Cpf,
    /// CNPJ of the account holder.
    Cnpj,
    /// E-mail address.
    Email,
    /// Phone number.
    Telefone,
    /// Random key issued by the bank (EVP / UUID).
    Aleatoria,
}

/// Step 4 — banking and payout data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankInfo {
    /// COMPE bank code (e.g. "341" for Itaú).
    pub bank_code: String,
    /// Account kind.
    pub account_kind: AccountKind,
    /// Branch (agência) number.
    pub agency: String,
    /// Account number without the check digit.
    pub account: String,
    /// Single account check digit.
    pub account_digit: String,
    /// Pix payout key value.
    pub pix_key: String,
    /// Which shape `pix_key` holds.
    pub pix_key_kind: PixKeyKind,
}

/// The accumulated form record carried across wizard steps.
///
/// Each slot is filled when its step commits and is only ever extended or
/// overwritten, never retracted — navigating backwards keeps the data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRecord {
    /// Step 1 data, once committed.
    pub credentials: Option<Credentials>,
    /// Step 2 data, once committed.
    pub personal: Option<PersonalInfo>,
    /// Step 3 data, once committed.
    pub address: Option<AddressInfo>,
    /// Step 4 data, once committed.
    pub bank: Option<BankInfo>,
}

impl SignupRecord {
    /// Empty record, nothing committed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge step 1 data (overwrites any earlier commit).
    pub fn apply_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Merge step 2 data.
    pub fn apply_personal(&mut self, personal: PersonalInfo) {
        self.personal = Some(personal);
    }

    /// Merge step 3 data.
    pub fn apply_address(&mut self, address: AddressInfo) {
        self.address = Some(address);
    }

    /// Merge step 4 data.
    pub fn apply_bank(&mut self, bank: BankInfo) {
        self.bank = Some(bank);
    }

    /// Whether every data step (1–4) has committed.
    pub fn is_complete(&self) -> bool {
        self.credentials.is_some()
            && self.personal.is_some()
            && self.address.is_some()
            && self.bank.is_some()
    }
}
