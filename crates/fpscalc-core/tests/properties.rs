//! Property-based tests for the series engine.
//!
//! Each property runs on its own engine with a low schoolbook threshold so
//! that short random inputs still go through the transform path.

use proptest::prelude::*;

use fpscalc_core::ext::{bostan_mori, lagrange_interpolate};
use fpscalc_core::{EngineOptions, ModInt, PolyEngine, Series, MODULUS};
use fpscalc_ntt::multiply_naive;

fn engine() -> PolyEngine {
    PolyEngine::new(EngineOptions {
        naive_threshold: 1,
        arena_capacity: 256,
    })
}

fn series(max_len: usize) -> impl Strategy<Value = Series> {
    prop::collection::vec(0u64..u64::from(MODULUS), 1..max_len).prop_map(|v| Series::from_u64s(&v))
}

/// Random series with constant term fixed to `c`.
fn series_with_constant(max_len: usize, c: u64) -> impl Strategy<Value = Series> {
    series(max_len).prop_map(move |mut s| {
        s[0] = ModInt::new(c);
        s
    })
}

fn unit(n: usize) -> Series {
    Series::one().truncated(n)
}

#[test]
fn one_plus_x_scenario() {
    let e = engine();
    let a = Series::from_i64s(&[1, 1]);
    assert_eq!(e.multiply(&a, &a).unwrap(), Series::from_i64s(&[1, 2, 1]));
    let p = u64::from(MODULUS);
    assert_eq!(
        e.inverse(&a, 4).unwrap(),
        Series::from_u64s(&[1, p - 1, 1, p - 1])
    );
}

#[test]
fn exp_of_x_scenario() {
    let e = engine();
    let expected: Series = [1u64, 1, 2, 6, 24]
        .iter()
        .map(|&f| ModInt::new(f).inv())
        .collect();
    assert_eq!(e.exp(&Series::from_i64s(&[0, 1]), 5).unwrap(), expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// NTT product equals the schoolbook product.
    #[test]
    fn convolution_matches_schoolbook(a in series(60), b in series(60)) {
        let e = engine();
        let got = e.multiply(&a, &b).unwrap();
        prop_assert_eq!(got.coeffs(), &multiply_naive(&a, &b)[..]);
    }

    /// a * a^-1 = 1 mod x^n.
    #[test]
    fn inverse_round_trip(a in series(50), n in 1usize..120) {
        prop_assume!(!a[0].is_zero());
        let e = engine();
        let inv = e.inverse(&a, n).unwrap();
        prop_assert_eq!(inv.len(), n);
        prop_assert_eq!(e.multiply(&a, &inv).unwrap().truncated(n), unit(n));
    }

    /// exp(ln(a)) = a for a[0] = 1.
    #[test]
    fn exp_undoes_ln(a in series_with_constant(40, 1), n in 1usize..90) {
        let e = engine();
        let back = e.exp(&e.ln(&a, n).unwrap(), n).unwrap();
        prop_assert_eq!(back, a.truncated(n));
    }

    /// ln(exp(b)) = b for b[0] = 0.
    #[test]
    fn ln_undoes_exp(b in series_with_constant(40, 0), n in 1usize..90) {
        let e = engine();
        let back = e.ln(&e.exp(&b, n).unwrap(), n).unwrap();
        prop_assert_eq!(back, b.truncated(n));
    }

    /// sqrt(a)^2 = a for a[0] = 1.
    #[test]
    fn sqrt_squares_back(a in series_with_constant(40, 1), n in 1usize..90) {
        let e = engine();
        let root = e.sqrt(&a, n).unwrap();
        prop_assert_eq!(root[0], ModInt::ONE);
        prop_assert_eq!(e.multiply(&root, &root).unwrap().truncated(n), a.truncated(n));
    }

    /// sqrt(b^2) squares back for any nonzero constant.
    #[test]
    fn sqrt_of_squares_any_constant(b in series(30), n in 1usize..60) {
        prop_assume!(!b[0].is_zero());
        let e = engine();
        let sq = e.multiply(&b, &b).unwrap().truncated(n);
        let root = e.sqrt(&sq, n).unwrap();
        prop_assert_eq!(e.multiply(&root, &root).unwrap().truncated(n), sq);
    }

    /// a = b q + r exactly, with deg r < deg b.
    #[test]
    fn division_identity(a in series(80), b in series(40)) {
        let mut b = b;
        let last = b.len() - 1;
        if b[last].is_zero() {
            b[last] = ModInt::ONE;
        }
        let e = engine();
        let (q, r) = e.div_rem(&a, &b).unwrap();
        prop_assert!(r.len() < b.len());
        let mut back = &e.multiply(&b, &q).unwrap() + &r;
        back.resize(a.len().max(back.len()));
        let mut expected = a.clone();
        expected.resize(back.len());
        prop_assert_eq!(back, expected);
    }

    /// pow(a, k) matches k - 1 products.
    #[test]
    fn pow_matches_products(a in series(12), k in 0u64..6, n in 1usize..40) {
        let e = engine();
        let mut expected = Series::one();
        for _ in 0..k {
            expected = e.multiply(&expected, &a).unwrap().truncated(n);
        }
        prop_assert_eq!(e.pow(&a, k, n).unwrap(), expected.truncated(n));
    }

    /// Multi-point evaluation agrees with Horner.
    #[test]
    fn eval_many_matches_horner(
        poly in series(50),
        points in prop::collection::vec(0u64..u64::from(MODULUS), 0..70),
    ) {
        let e = engine();
        let points: Vec<ModInt> = points.into_iter().map(ModInt::new).collect();
        let got = e.eval_many(&poly, &points).unwrap();
        let expected: Vec<ModInt> = points.iter().map(|&x| poly.eval(x)).collect();
        prop_assert_eq!(got, expected);
    }

    /// Fast and quadratic interpolation agree on distinct nodes.
    #[test]
    fn interpolations_agree(ys in prop::collection::vec(0u64..u64::from(MODULUS), 1..40)) {
        let e = engine();
        let xs: Vec<ModInt> = (0..ys.len() as u64).map(|i| ModInt::new(i * i + 3 * i + 11)).collect();
        let ys: Vec<ModInt> = ys.into_iter().map(ModInt::new).collect();
        prop_assert_eq!(e.interpolate(&xs, &ys).unwrap(), lagrange_interpolate(&xs, &ys).unwrap());
    }

    /// Bostan–Mori agrees with the inverse series.
    #[test]
    fn bostan_mori_matches_inverse(p in series(20), q in series_with_constant(20, 1), n in 0usize..100) {
        let e = engine();
        let expected = e.multiply(&p, &e.inverse(&q, n + 1).unwrap()).unwrap().coeff(n);
        prop_assert_eq!(bostan_mori(&e, n as u64, &p, &q).unwrap(), expected);
    }

    /// No scratch survives a top-level call.
    #[test]
    fn arena_is_restored(a in series_with_constant(40, 1), n in 1usize..80) {
        let e = engine();
        let before = e.high_water_mark();
        let _ = e.inverse(&a, n).unwrap();
        let _ = e.exp(&e.ln(&a, n).unwrap(), n).unwrap();
        let _ = e.sqrt(&a, n).unwrap();
        let _ = e.div_rem(&a, &Series::from_i64s(&[3, 1])).unwrap();
        prop_assert_eq!(e.high_water_mark(), before);
        prop_assert_eq!(e.stats().order_violations, 0);
    }
}
