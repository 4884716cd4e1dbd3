//! Shared digit-mask formatting.

/// Keep only ASCII digits.
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply a fixed-offset mask: digits are truncated to `capacity` and each
/// `(index, separator)` pair inserts `separator` before the digit at
/// `index`. Partial input gets a partial mask, which makes the formatters
/// correct for format-as-you-type use and idempotent on formatted input.
pub(crate) fn apply_mask(value: &str, capacity: usize, separators: &[(usize, char)]) -> String {
    let digits = strip_digits(value);
    let mut out = String::with_capacity(capacity + separators.len());
    for (i, d) in digits.chars().take(capacity).enumerate() {
        for &(at, sep) in separators {
            if at == i {
                out.push(sep);
            }
        }
        out.push(d);
    }
    out
}

/// Format a phone number as `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`.
///
/// Accepts 10 or 11 digits (the 11th is the leading mobile 9); partial
/// input is formatted as far as it goes.
pub fn format_phone(value: &str) -> String {
    let digits = strip_digits(value);
    let digits = &digits[..digits.len().min(11)];
    if digits.len() <= 2 {
        return digits.to_string();
    }
    let (ddd, rest) = digits.split_at(2);
    if rest.len() <= 4 {
        return format!("({ddd}) {rest}");
    }
    let (head, tail) = rest.split_at(rest.len() - 4);
    format!("({ddd}) {head}-{tail}")
}

/// Format a CEP as `00000-000`.
pub fn format_cep(value: &str) -> String {
    apply_mask(value, 8, &[(5, '-')])
}
