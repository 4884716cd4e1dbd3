//! CPF (Cadastro de Pessoas Físicas) validation and formatting.

use super::format::apply_mask;

/// Validate the two CPF check digits.
///
/// `digits` must be exactly 11 ASCII digits — punctuation is the caller's
/// problem (see [`strip_digits`](super::strip_digits)). Strings of one
/// repeated digit are rejected even though every one of them satisfies the
/// raw checksum.
pub fn validate_cpf(digits: &str) -> bool {
    if digits.len() != 11 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let d: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

    // 00000000000 through 99999999999 all pass the checksum below.
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    check_digit(&d[..9], 10) == d[9] && check_digit(&d[..10], 11) == d[10]
}

/// Weighted-sum-mod-11 check digit: weights run from `first_weight` down
/// to 2; remainder below 2 maps to 0, otherwise 11 − remainder.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(d, w)| d * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Format a CPF as `000.000.000-00`; partial input gets a partial mask.
pub fn format_cpf(value: &str) -> String {
    apply_mask(value, 11, &[(3, '.'), (6, '.'), (9, '-')])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cpfs() {
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("12345678909"));
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("39053344705"));
    }

    #[test]
    fn zero_check_digits() {
        // Both check digits can legitimately be zero.
        assert!(validate_cpf("16899535009"));
    }

    #[test]
    fn wrong_check_digits() {
        assert!(!validate_cpf("52998224724"));
        assert!(!validate_cpf("52998224735"));
        assert!(!validate_cpf("12345678901"));
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9u8 {
            let cpf: String = std::iter::repeat_n(char::from(b'0' + d), 11).collect();
            assert!(!validate_cpf(&cpf), "{cpf} must be rejected");
        }
    }

    #[test]
    fn wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247251"));
    }

    #[test]
    fn non_digits_rejected() {
        // Stripping is the caller's job; punctuation here is invalid.
        assert!(!validate_cpf("529.982.247"));
        assert!(!validate_cpf("5299822472a"));
    }

    #[test]
    fn format_full() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn format_partial() {
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("5299822"), "529.982.2");
        assert_eq!(format_cpf("5299822472"), "529.982.247-2");
    }

    #[test]
    fn format_idempotent() {
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
    }

    #[test]
    fn format_truncates_excess() {
        assert_eq!(format_cpf("529982247259999"), "529.982.247-25");
    }
}
