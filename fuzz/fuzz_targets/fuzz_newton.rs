#![no_main]

use libfuzzer_sys::fuzz_target;

use fpscalc_core::{ModInt, PolyEngine, Series};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let n = 1 + usize::from(data[0]) * 4;
    let mut a: Series = data[1..].iter().map(|&b| ModInt::new(u64::from(b))).collect();
    a[0] = ModInt::ONE;

    let engine = PolyEngine::default();
    let inv = engine.inverse(&a, n).unwrap();
    assert_eq!(engine.multiply(&a, &inv).unwrap().truncated(n), Series::one().truncated(n));

    let back = engine.exp(&engine.ln(&a, n).unwrap(), n).unwrap();
    assert_eq!(back, a.truncated(n), "exp(ln a) != a");

    let root = engine.sqrt(&a, n).unwrap();
    assert_eq!(engine.multiply(&root, &root).unwrap().truncated(n), a.truncated(n));
    assert_eq!(engine.high_water_mark(), 0);
});
