//! Brazilian federal unit (UF) validation.

/// Check whether `code` is one of the 27 federal units.
pub fn is_known_uf(code: &str) -> bool {
    UNITS.binary_search_by_key(&code, |&(c, _)| c).is_ok()
}

/// Look up the full name of a federal unit.
pub fn uf_name(code: &str) -> Option<&'static str> {
    UNITS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| UNITS[i].1)
}

/// Sorted list of (UF code, name).
/// Sorted for binary search.
static UNITS: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AM", "Amazonas"),
    ("AP", "Amapá"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MG", "Minas Gerais"),
    ("MS", "Mato Grosso do Sul"),
    ("MT", "Mato Grosso"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("PR", "Paraná"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("RS", "Rio Grande do Sul"),
    ("SC", "Santa Catarina"),
    ("SE", "Sergipe"),
    ("SP", "São Paulo"),
    ("TO", "Tocantins"),
];
