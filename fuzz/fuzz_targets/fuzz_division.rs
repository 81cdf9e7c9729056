#![no_main]

use libfuzzer_sys::fuzz_target;

use fpscalc_core::{ModInt, PolyEngine, Series};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let split = 1 + usize::from(data[0]) * (data.len() - 1) / 256;
    let a: Series = data[1..split].iter().map(|&b| ModInt::new(u64::from(b))).collect();
    let b: Series = data[split..].iter().map(|&b| ModInt::new(u64::from(b))).collect();

    let engine = PolyEngine::default();
    match engine.div_rem(&a, &b) {
        Ok((q, r)) => {
            assert!(r.len() < b.len());
            let mut back = &engine.multiply(&b, &q).unwrap() + &r;
            back.shrink();
            let mut expected = a.clone();
            expected.shrink();
            assert_eq!(back, expected, "a != b q + r");
        }
        Err(_) => assert!(b.last().map_or(true, |c| c.is_zero())),
    }
});
