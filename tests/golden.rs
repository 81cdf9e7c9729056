//! Golden file integration tests.
//!
//! Reads tests/testdata/series_golden.json and checks every operation on
//! both product paths (schoolbook and transform) and through the
//! default-engine methods on `Series`.

use serde::Deserialize;

use fpscalc_core::{EngineOptions, ModInt, PolyEngine, Series};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    op: String,
    a: Series,
    #[serde(default)]
    b: Option<Series>,
    #[serde(default)]
    n: Option<usize>,
    #[serde(default)]
    k: Option<u64>,
    #[serde(default)]
    points: Option<Vec<ModInt>>,
    expected: Expected,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(untagged)]
enum Expected {
    Coeffs(Series),
    Division { quotient: Series, remainder: Series },
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/series_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_case(engine: &PolyEngine, case: &GoldenCase) -> Expected {
    let n = || case.n.expect("case needs n");
    let b = || case.b.as_ref().expect("case needs b");
    let series = match case.op.as_str() {
        "mul" => engine.multiply(&case.a, b()),
        "inv" => engine.inverse(&case.a, n()),
        "ln" => engine.ln(&case.a, n()),
        "exp" => engine.exp(&case.a, n()),
        "sqrt" => engine.sqrt(&case.a, n()),
        "pow" => engine.pow(&case.a, case.k.expect("case needs k"), n()),
        "sin" => engine.sin(&case.a, n()),
        "cos" => engine.cos(&case.a, n()),
        "tan" => engine.tan(&case.a, n()),
        "eval" => engine
            .eval_many(&case.a, case.points.as_deref().expect("case needs points"))
            .map(Series::from),
        "div" => {
            let (quotient, remainder) = engine.div_rem(&case.a, b()).unwrap();
            return Expected::Division {
                quotient,
                remainder,
            };
        }
        other => panic!("unknown op {other}"),
    };
    Expected::Coeffs(series.unwrap_or_else(|e| panic!("{}: {e}", case.name)))
}

fn run_default(case: &GoldenCase) -> Option<Expected> {
    let n = case.n.unwrap_or(0);
    let series = match case.op.as_str() {
        "inv" => case.a.inverse(n),
        "ln" => case.a.ln(n),
        "exp" => case.a.exp(n),
        "sqrt" => case.a.sqrt(n),
        "sin" => case.a.sin(n),
        "cos" => case.a.cos(n),
        "tan" => case.a.tan(n),
        "mul" => Ok(&case.a * case.b.as_ref()?),
        "div" => {
            let b = case.b.as_ref()?;
            return Some(Expected::Division {
                quotient: &case.a / b,
                remainder: &case.a % b,
            });
        }
        _ => return None,
    };
    Some(Expected::Coeffs(series.unwrap()))
}

// ---------------------------------------------------------------------------
// Golden: every case on both product paths
// ---------------------------------------------------------------------------

#[test]
fn golden_default_engine_options() {
    let engine = PolyEngine::default();
    for case in &load_golden_data().cases {
        assert_eq!(run_case(&engine, case), case.expected, "mismatch in {}", case.name);
    }
}

#[test]
fn golden_transform_path() {
    let engine = PolyEngine::new(EngineOptions {
        naive_threshold: 1,
        arena_capacity: 8,
    });
    for case in &load_golden_data().cases {
        assert_eq!(run_case(&engine, case), case.expected, "mismatch in {}", case.name);
    }
    assert_eq!(engine.high_water_mark(), 0);
    assert_eq!(engine.stats().order_violations, 0);
}

#[test]
fn golden_series_methods() {
    for case in &load_golden_data().cases {
        if let Some(got) = run_default(case) {
            assert_eq!(got, case.expected, "mismatch in {}", case.name);
        }
    }
}

#[test]
fn golden_file_covers_every_operation() {
    let data = load_golden_data();
    for op in ["mul", "inv", "ln", "exp", "sqrt", "pow", "div", "eval", "sin", "cos", "tan"] {
        assert!(data.cases.iter().any(|c| c.op == op), "no golden case for {op}");
    }
}
