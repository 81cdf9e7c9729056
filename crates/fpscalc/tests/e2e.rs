//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fpscalc() -> Command {
    Command::cargo_bin("fpscalc").expect("binary not found")
}

#[test]
fn help_flag() {
    fpscalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("998244353"));
}

#[test]
fn version_flag() {
    fpscalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fpscalc"));
}

#[test]
fn square_of_one_plus_x() {
    fpscalc()
        .args(["mul", "1,1", "1,1"])
        .assert()
        .success()
        .stdout("1 2 1\n");
}

#[test]
fn inverse_of_one_plus_x() {
    fpscalc()
        .args(["inv", "1,1", "-n", "4"])
        .assert()
        .success()
        .stdout("1 998244352 1 998244352\n");
}

#[test]
fn exp_of_x() {
    // 1, 1, 1/2, 1/6, 1/24
    fpscalc()
        .args(["exp", "0 1", "-n", "5"])
        .assert()
        .success()
        .stdout("1 1 499122177 166374059 291154603\n");
}

#[test]
fn ln_of_exp_round_trip() {
    fpscalc()
        .args(["ln", "1,1,499122177,166374059,291154603", "-n", "5"])
        .assert()
        .success()
        .stdout("0 1 0 0 0\n");
}

#[test]
fn sqrt_of_square() {
    fpscalc()
        .args(["sqrt", "4,4,1", "-n", "3"])
        .assert()
        .success()
        .stdout("2 1 0\n");
}

#[test]
fn pow_binomial() {
    fpscalc()
        .args(["pow", "1,1", "-k", "4", "-n", "6"])
        .assert()
        .success()
        .stdout("1 4 6 4 1 0\n");
}

#[test]
fn division_text_and_json() {
    fpscalc()
        .args(["div", "1,2,1", "1,1"])
        .assert()
        .success()
        .stdout("1 1\n0\n");

    let output = fpscalc()
        .args(["--json", "div", "-1,0,1", "-1,1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["quotient"], serde_json::json!([1, 1]));
    assert_eq!(value["remainder"], serde_json::json!([0]));
}

#[test]
fn json_from_environment() {
    fpscalc()
        .env("FPSCALC_JSON", "true")
        .args(["mul", "2", "3,4"])
        .assert()
        .success()
        .stdout("[6,8]\n");
}

#[test]
fn eval_points() {
    fpscalc()
        .args(["eval", "1,0,1", "--points", "0,1,2,-1"])
        .assert()
        .success()
        .stdout("1 2 5 2\n");
}

#[test]
fn fibonacci_recurrence() {
    fpscalc()
        .args(["recurrence", "--coeffs", "1,1", "--init", "0,1", "-n", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            (2_880_067_194_370_816_120u64 % 998_244_353).to_string(),
        ));
}

#[test]
fn small_naive_threshold() {
    fpscalc()
        .args(["--naive-threshold", "1", "mul", "1,1", "1,-1"])
        .assert()
        .success()
        .stdout("1 0 998244352\n");
}

#[test]
fn verbose_mode() {
    fpscalc()
        .args(["-v", "inv", "1,1", "-n", "8"])
        .assert()
        .success();
}

#[test]
fn ln_requires_unit_constant() {
    fpscalc()
        .args(["ln", "2,1", "-n", "3"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("constant term must be 1"));
}

#[test]
fn inverse_requires_nonzero_constant() {
    fpscalc()
        .args(["inv", "0,1", "-n", "3"])
        .assert()
        .code(5);
}

#[test]
fn division_by_zero_leading_coefficient() {
    fpscalc().args(["div", "1,2,3", "1,0"]).assert().code(5);
}

#[test]
fn unparseable_series() {
    fpscalc()
        .args(["mul", "1,x", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn precision_beyond_capacity() {
    for n in ["8388609", "1099511627776"] {
        fpscalc()
            .args(["inv", "1,1", "-n", n])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("exceeds the modulus capacity"));
    }
}

#[test]
fn short_recurrence_init() {
    fpscalc()
        .args(["recurrence", "--coeffs", "1,1", "--init", "0", "-n", "5"])
        .assert()
        .code(4);
}

#[test]
fn missing_subcommand() {
    fpscalc().assert().failure();
}
