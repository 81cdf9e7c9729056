#![no_main]

use libfuzzer_sys::fuzz_target;

use fpscalc_core::{EngineOptions, ModInt, PolyEngine, Series};
use fpscalc_ntt::multiply_naive;

fn words(bytes: &[u8]) -> Vec<ModInt> {
    bytes
        .chunks_exact(4)
        .map(|c| ModInt::new(u64::from(u32::from_le_bytes([c[0], c[1], c[2], c[3]]))))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // First byte splits the rest into two operands
    let split = 1 + usize::from(data[0]) * (data.len() - 1) / 256;
    let a = Series::new(words(&data[1..split]));
    let b = Series::new(words(&data[split..]));
    if a.is_empty() || b.is_empty() {
        return;
    }

    let engine = PolyEngine::new(EngineOptions {
        naive_threshold: 1,
        arena_capacity: 16,
    });
    let product = engine.multiply(&a, &b).unwrap();
    assert_eq!(product.coeffs(), &multiply_naive(&a, &b)[..], "transform != schoolbook");
    assert_eq!(engine.high_water_mark(), 0);
});
