use cadastro::referral::*;

fn main() {
    let directory = InMemoryDirectory::with_demo_referrers();

    println!("Referrers offered for manual selection:");
    for referrer in directory.all() {
        println!("  [{}] {} — {}", referrer.id, referrer.name, referrer.kind.label());
    }

    // Resolve the entry link's ref code against the directory
    for query in ["?ref=2", "?utm_source=insta&ref=4", "?ref=99", "?page=1"] {
        match ref_code_from_query(query) {
            Some(code) => match directory.lookup(&code) {
                Some(referrer) => println!("{query} -> indicado por {}", referrer.name),
                None => println!("{query} -> código '{code}' desconhecido, ignorado"),
            },
            None => println!("{query} -> sem código de indicação"),
        }
    }
}
