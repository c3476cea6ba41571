use data_loader::{Catalog, Factor};
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_file = Path::new("data/countries.dat");

    println!("Loading country catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_file(data_file)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Countries: {}", catalog.len());

    for country in &catalog {
        println!(
            "  {:<16} cost {:>5.1}  safety {:>5.1}  {:>5.0} Mbps",
            country.name,
            country.value(Factor::CostOfLiving),
            country.value(Factor::Safety),
            country.value(Factor::InternetSpeed),
        );
    }
}
