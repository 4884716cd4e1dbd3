//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and formatting.

use super::format::apply_mask;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate the two CNPJ check digits.
///
/// `digits` must be exactly 14 ASCII digits. Strings of one repeated digit
/// are rejected (only the all-zero string passes the raw checksum, but
/// reference implementations guard the whole family).
pub fn validate_cnpj(digits: &str) -> bool {
    if digits.len() != 14 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let d: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    check_digit(&d[..12], &FIRST_WEIGHTS) == d[12] && check_digit(&d[..13], &SECOND_WEIGHTS) == d[13]
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Format a CNPJ as `00.000.000/0000-00`; partial input gets a partial mask.
pub fn format_cnpj(value: &str) -> String {
    apply_mask(value, 14, &[(2, '.'), (5, '.'), (8, '/'), (12, '-')])
}
