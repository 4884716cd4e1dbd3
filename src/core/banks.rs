//! COMPE bank code validation.
//!
//! Provides a lookup of the bank codes offered in the payout step. COMPE
//! codes identify Brazilian financial institutions in the national
//! clearing system.

/// Check whether `code` is a known COMPE bank code.
pub fn is_known_bank_code(code: &str) -> bool {
    BANK_CODES.binary_search_by_key(&code, |&(c, _)| c).is_ok()
}

/// Look up the institution name for a COMPE code.
pub fn bank_name(code: &str) -> Option<&'static str> {
    BANK_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| BANK_CODES[i].1)
}

/// Sorted list of (COMPE code, institution name).
/// Sorted for binary search.
static BANK_CODES: &[(&str, &str)] = &[
    ("001", "Banco do Brasil"),
    ("033", "Santander"),
    ("041", "Banrisul"),
    ("070", "BRB"),
    ("077", "Banco Inter"),
    ("104", "Caixa Econômica Federal"),
    ("208", "BTG Pactual"),
    ("212", "Banco Original"),
    ("237", "Bradesco"),
    ("260", "Nubank"),
    ("290", "PagBank"),
    ("323", "Mercado Pago"),
    ("336", "C6 Bank"),
    ("341", "Itaú"),
    ("380", "PicPay"),
    ("422", "Safra"),
    ("623", "Banco Pan"),
    ("655", "Banco BV"),
    ("748", "Sicredi"),
    ("756", "Sicoob"),
];
