//! Integration test harness for the fpscalc workspace.
//!
//! The tests under `tests/` exercise the public crates together.
