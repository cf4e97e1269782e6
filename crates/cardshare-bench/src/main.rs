//! Benchmark for collection encoding and trade matching.
//!
//! Uses a catalog shaped like a real card game (four sets, ~620 cards) unless a
//! card database JSON path is given, and random collections from a fixed seed.

use std::fs;
use std::time::{Duration, Instant};

use cardshare::codec::{decode_collection, encode_collection_with_options};
use cardshare::trade::compare_collections_with_options;
use cardshare::{Catalog, CatalogBuilder, Collection, EncodeOptions, EncodedBlob, TradeOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Byte capacity of a version 40, low error correction QR code.
const QR_BYTE_CAPACITY: usize = 2953;

const ITERATIONS: u32 = 200;

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

const RARITIES: [&str; 7] = ["◊", "◊◊", "◊◊◊", "◊◊◊◊", "☆", "☆☆", "♛"];

/// Builds a catalog with the given set sizes and a repeating rarity ladder.
fn synthetic_catalog(sets: &[(&str, u32)]) -> Catalog {
    let mut builder = CatalogBuilder::new();
    for &(set_code, size) in sets {
        builder = builder.set(set_code, |mut s| {
            for number in 1..=size {
                let rarity = if set_code.starts_with("P-") {
                    ""
                } else {
                    RARITIES[(number as usize * 7 / size as usize).min(RARITIES.len() - 1)]
                };
                s = s.card(number, rarity);
            }
            s
        });
    }
    builder.build().expect("Failed to build synthetic catalog")
}

/// Random collection: each card owned with probability `owned`, 1-4 copies,
/// with an occasional large stack to exercise clamping.
fn random_collection(catalog: &Catalog, rng: &mut StdRng, owned: f64) -> Collection {
    let mut collection = Collection::new();
    for card in catalog.iter() {
        if rng.gen_bool(owned) {
            let quantity = if rng.gen_bool(0.01) {
                rng.gen_range(64..200)
            } else {
                rng.gen_range(1..=4)
            };
            collection.set(card.code.clone(), quantity);
        }
    }
    collection
}

fn per_iter(total: Duration) -> Duration {
    total / ITERATIONS
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading catalog from: {}", path);
            let json = fs::read_to_string(&path).expect("Failed to read card database");
            Catalog::from_database_json(&json).expect("Failed to parse card database")
        }
        None => synthetic_catalog(&[("A1", 286), ("A1a", 86), ("A2", 207), ("P-A", 41)]),
    };

    println!(
        "Catalog: {} cards in {} sets (layout {})",
        catalog.len(),
        catalog.set_count(),
        &catalog.layout_digest()[..16]
    );

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for owned in [0.1, 0.5, 0.95] {
        let collection = random_collection(&catalog, &mut rng, owned);
        println!(
            "\n=== {:.0}% owned: {} distinct, {} copies ===",
            owned * 100.0,
            collection.len(),
            collection.total_copies()
        );

        for level in [1, 6, 9] {
            let options = EncodeOptions::new().compression_level(level);

            let start = Instant::now();
            let mut blob = EncodedBlob::new();
            for _ in 0..ITERATIONS {
                blob = encode_collection_with_options(&collection, &catalog, options)
                    .expect("Failed to encode");
            }
            let encode_time = per_iter(start.elapsed());

            let json = serde_json::to_string(&blob).expect("Failed to serialize blob");
            println!(
                "Level {}: {} bytes JSON, encode {:?}, QR {}",
                level,
                json.len(),
                encode_time,
                if json.len() <= QR_BYTE_CAPACITY { "fits" } else { "too large" }
            );
        }

        let blob = encode_collection_with_options(&collection, &catalog, EncodeOptions::new())
            .expect("Failed to encode");
        let start = Instant::now();
        let mut decoded = Collection::new();
        for _ in 0..ITERATIONS {
            decoded = decode_collection(&blob, &catalog).expect("Failed to decode");
        }
        println!("Decode: {:?}", per_iter(start.elapsed()));

        let clamped = collection.iter().filter(|(_, q)| *q > 63).count();
        let matching = collection
            .iter()
            .filter(|&(code, q)| decoded.get(code) == q.min(63))
            .count();
        assert_eq!(matching, collection.len(), "Roundtrip should only clamp");
        println!("Roundtrip OK ({} quantities clamped)", clamped);

        // Serialized collection map, for comparison
        let raw = serde_json::to_string(&collection).expect("Failed to serialize collection");
        println!(
            "Raw quantity map JSON: {} bytes ({:.1}x larger)",
            raw.len(),
            raw.len() as f64 / serde_json::to_string(&blob).map(|s| s.len()).unwrap_or(1) as f64
        );
    }

    println!("\n=== Trade matching ===");
    let a = random_collection(&catalog, &mut rng, 0.6);
    let b = random_collection(&catalog, &mut rng, 0.6);

    for (label, options) in [("shared", TradeOptions::new()), ("exclusive", TradeOptions::exclusive())] {
        let start = Instant::now();
        let mut proposals = Vec::new();
        for _ in 0..ITERATIONS {
            proposals = compare_collections_with_options(&a, &b, &catalog, options);
        }
        let distinct_b: std::collections::BTreeSet<&str> =
            proposals.iter().map(|p| p.from_b.code.as_str()).collect();
        println!(
            "{:>9}: {} proposals using {} distinct cards from B in {:?}",
            label,
            proposals.len(),
            distinct_b.len(),
            per_iter(start.elapsed())
        );
    }
}
