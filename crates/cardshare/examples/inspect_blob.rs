//! Simple inspector for shared collection blobs.
//!
//! Usage: `cargo run --example inspect_blob -- <cardDatabase.json> <blob.json>`

use std::fs;

use cardshare::{decode_collection, Catalog, EncodedBlob};

fn main() {
    let mut args = std::env::args().skip(1);
    let catalog_path = args
        .next()
        .unwrap_or_else(|| "data/cardDatabase.json".to_string());
    let blob_path = args.next().unwrap_or_else(|| "collection.json".to_string());

    println!("Catalog: {}", catalog_path);
    let catalog_json = fs::read_to_string(&catalog_path).expect("Failed to read catalog");
    let catalog = Catalog::from_database_json(&catalog_json).expect("Failed to parse catalog");
    println!(
        "  {} cards in {} sets, layout {}",
        catalog.len(),
        catalog.set_count(),
        &catalog.layout_digest()[..16]
    );

    println!("Blob: {}", blob_path);
    let blob_json = fs::read_to_string(&blob_path).expect("Failed to read blob");
    println!("  {} bytes of JSON", blob_json.len());

    let blob = EncodedBlob::from_json(&blob_json).expect("Failed to parse blob");
    let collection = decode_collection(&blob, &catalog).expect("Failed to decode");

    println!("\n=== Sets ===");
    for (set_code, payload) in blob.iter() {
        match catalog.cards_in_set(set_code) {
            Some(cards) => {
                let owned = cards.iter().filter(|c| collection.contains(&c.code)).count();
                let copies: u64 = cards.iter().map(|c| collection.get(&c.code) as u64).sum();
                println!(
                    "{:>6}: {:>4}/{:<4} owned, {:>5} copies, payload {} chars",
                    set_code,
                    owned,
                    cards.len(),
                    copies,
                    payload.len()
                );
            }
            None => println!("{:>6}: not in catalog (ignored)", set_code),
        }
    }

    println!("\n=== Totals ===");
    println!("Distinct cards: {}", collection.len());
    println!("Total copies: {}", collection.total_copies());
    let spares = collection.iter().filter(|(_, q)| *q > 1).count();
    println!("Cards with spares: {}", spares);
}
