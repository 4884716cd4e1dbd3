//! International dial codes offered in the phone field.
//!
//! The signup targets Brazil first, but the phone field accepts the same
//! short list of dial codes the original form offered.

/// Check whether `code` is an offered dial code (digits only, no "+").
pub fn is_known_dial_code(code: &str) -> bool {
    DIAL_CODES.binary_search_by_key(&code, |&(c, _)| c).is_ok()
}

/// Display label for a dial code (e.g. "Brasil (+55)").
pub fn dial_code_label(code: &str) -> Option<&'static str> {
    DIAL_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| DIAL_CODES[i].1)
}

/// Default dial code pre-selected in the form.
pub const DEFAULT_DIAL_CODE: &str = "55";

/// Sorted list of (dial code, display label).
/// Sorted for binary search.
static DIAL_CODES: &[(&str, &str)] = &[
    ("1", "EUA/Canadá (+1)"),
    ("33", "França (+33)"),
    ("34", "Espanha (+34)"),
    ("351", "Portugal (+351)"),
    ("39", "Itália (+39)"),
    ("44", "Reino Unido (+44)"),
    ("49", "Alemanha (+49)"),
    ("55", "Brasil (+55)"),
    ("81", "Japão (+81)"),
    ("86", "China (+86)"),
];
