#![no_main]

use libfuzzer_sys::fuzz_target;

use cadastro::documento::{format_cep, format_cnpj, format_cpf, format_phone};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatters must never panic and must be idempotent.
        let once = format_cpf(s);
        assert_eq!(format_cpf(&once), once);

        let once = format_cnpj(s);
        assert_eq!(format_cnpj(&once), once);

        let once = format_phone(s);
        assert_eq!(format_phone(&once), once);

        let once = format_cep(s);
        assert_eq!(format_cep(&once), once);
    }
});
