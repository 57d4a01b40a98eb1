pub type F = f32;

pub mod error;
pub use error::{Error, Result};

pub mod input;
pub mod report;

mod solve;
pub use solve::*;

use std::io::{BufRead, Write};

/// Prompts on `out`, reads three coefficients from `input` and reports the roots.
pub fn run(input: &mut impl BufRead, out: &mut impl Write, arith: Arithmetic) -> Result<()> {
    report::write_banner(out)?;
    let coeffs = input::read_coefficients(input)?;
    report::write_roots(out, solve(coeffs, arith))?;
    Ok(())
}

#[cfg(test)]
fn run_str(input: &str, arith: Arithmetic) -> Result<String> {
    let mut out = vec![];
    run(&mut input.as_bytes(), &mut out, arith)?;
    let out = String::from_utf8(out).unwrap();
    let header = format!("{}\n{}", report::BANNER, report::PROMPT);
    Ok(out.strip_prefix(&header).unwrap().to_string())
}

#[test]
fn test_run_real() {
    let out = run_str("1 -3 2\n", Arithmetic::Native).unwrap();
    assert_eq!(out, format!("{}\nx1 = 2\nx2 = 1\n", report::REAL));
}

#[test]
fn test_run_double_root() {
    let out = run_str("1 2 1\n", Arithmetic::Native).unwrap();
    assert_eq!(out, format!("{}\nx1 = -1\nx2 = -1\n", report::REAL));
}

#[test]
fn test_run_complex() {
    let out = run_str("1 0 1\n", Arithmetic::Native).unwrap();
    assert_eq!(out, format!("{}\n", report::COMPLEX));
}

#[test]
fn test_run_not_quadratic() {
    for input in ["0 0 0", "0 5 -3\n", "0\n-1\n-1\n"] {
        assert_eq!(run_str(input, Arithmetic::Native).unwrap(), "");
    }
}

#[test]
fn test_run_repeatable() {
    for input in ["3 7 -11", "-2 1 9", "5 1 5", "0 1 1", "1 65536 0"] {
        for arith in [Arithmetic::Native, Arithmetic::Wide] {
            assert_eq!(
                run_str(input, arith).unwrap(),
                run_str(input, arith).unwrap()
            );
        }
    }
}

#[test]
fn test_run_wide_changes_branch() {
    let native = run_str("1 46341 0", Arithmetic::Native).unwrap();
    assert_eq!(native, format!("{}\n", report::COMPLEX));
    let wide = run_str("1 46341 0", Arithmetic::Wide).unwrap();
    assert_eq!(wide, format!("{}\nx1 = 0\nx2 = -46341\n", report::REAL));
}

#[test]
fn test_run_min_leading_coefficient() {
    let out = run_str("-2147483648 5 3\n", Arithmetic::Native).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(report::REAL));
    let x1 = lines.next().unwrap();
    assert!(x1 == "x1 = nan" || x1 == "x1 = -nan", "{x1}");
    assert_eq!(lines.next(), Some("x2 = -inf"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_run_rejects_bad_input() {
    assert!(matches!(
        run_str("1 two 3", Arithmetic::Native),
        Err(Error::InvalidCoefficient { name: 'b', .. })
    ));
    assert!(matches!(
        run_str("1 2", Arithmetic::Native),
        Err(Error::MissingCoefficient { name: 'c' })
    ));
}
