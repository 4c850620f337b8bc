//! End-to-end checks of the `range-sqrt-sum` binary: stdout, stderr and exit codes.

use range_sqrt_sum::reference_sum;
use range_sqrt_sum::report::format_sum;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_range-sqrt-sum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn worked_example_prints_one_line() {
    let output = run_cli(&["1", "100", "4", "3"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(1, out.lines().count());
    assert!(out.starts_with("Sum: 6.6"), "{out}");
    assert!(out.trim_end().ends_with("e+02"), "{out}");
}

#[test]
fn single_thread_output_is_exact_for_every_method() {
    let expected = format!("{}\n", format_sum(reference_sum(1, 10_000, 1)));

    for method in ["1", "2", "3"] {
        let output = run_cli(&["1", "10000", "1", method]);
        assert!(output.status.success(), "method {method}");
        assert_eq!(expected, stdout(&output), "method {method}");
    }
}

#[test]
fn too_many_threads_fails_without_output() {
    let output = run_cli(&["1", "100", "33", "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("exceeds the maximum"), "{err}");
}

#[test]
fn invalid_method_fails_without_output() {
    for method in ["0", "4"] {
        let output = run_cli(&["1", "100", "4", method]);
        assert!(!output.status.success(), "method {method}");
        assert!(output.stdout.is_empty(), "method {method}");
        assert!(!output.stderr.is_empty(), "method {method}");
    }
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    for args in [&["1", "100", "4"][..], &["1", "100", "4", "3", "5"][..], &[][..]] {
        let output = run_cli(args);
        assert!(!output.status.success(), "{args:?}");
        assert!(output.stdout.is_empty(), "{args:?}");
    }
}

#[test]
fn negative_bounds_are_accepted_and_give_nan() {
    let output = run_cli(&["-10", "10", "2", "3"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Sum: ") && out.contains("nan"), "{out}");
}

#[test]
fn unsynchronized_runs_complete() {
    for _ in 0..2 {
        let output = run_cli(&["1", "1000000", "8", "1"]);
        assert!(output.status.success());
        assert!(stdout(&output).starts_with("Sum: "));
    }
}
