use cadastro::documento::*;

fn main() {
    // Checksum validation on stripped digits
    for cpf in ["52998224725", "52998224724", "11111111111"] {
        println!("CPF {cpf}: {}", if validate_cpf(cpf) { "válido" } else { "inválido" });
    }
    for cnpj in ["11222333000181", "11222333000180"] {
        println!("CNPJ {cnpj}: {}", if validate_cnpj(cnpj) { "válido" } else { "inválido" });
    }

    // Format-as-you-type masks: each keystroke reformats the whole value
    println!("\nCPF mask while typing:");
    let full = "52998224725";
    for len in [3, 6, 9, 11] {
        println!("  {:<11} -> {}", &full[..len], format_cpf(&full[..len]));
    }

    println!("\nOther masks:");
    println!("  {}", format_cnpj("11222333000181"));
    println!("  {}", format_phone("11987654321"));
    println!("  {}", format_cep("01310100"));
}
