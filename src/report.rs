use crate::solve::Roots;

use std::io::{self, Write};

pub const BANNER: &str = "This program solves quadratic equations of the form: ax^2 + bx + c = 0";
pub const PROMPT: &str = "Enter the coefficients a, b, and c (where a != 0): ";

pub const REAL: &str = "Discriminant is non-negative, so both roots are real.";
pub const COMPLEX: &str = "Discriminant is negative, so both roots are complex and not real.";

/// Significant digits of a default-configured C++ output stream.
const PRECISION: usize = 6;

/// Writes the banner line and the prompt, leaving the cursor after the prompt.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    write!(out, "{PROMPT}")?;
    out.flush()
}

/// Writes nothing for `None`, which is what [`crate::solve()`] yields when `a == 0`.
pub fn write_roots(out: &mut impl Write, roots: Option<Roots>) -> io::Result<()> {
    match roots {
        None => return Ok(()),
        Some(Roots::Real { x1, x2 }) => {
            writeln!(out, "{REAL}")?;
            writeln!(out, "x1 = {}", format_general(x1))?;
            writeln!(out, "x2 = {}", format_general(x2))?;
        }
        Some(Roots::Complex) => writeln!(out, "{COMPLEX}")?,
    }
    out.flush()
}

/// Formats like `printf("%g")`: six significant digits, no trailing zeros,
/// exponent form when the decimal exponent is below -4 or at least six.
pub fn format_general(x: f64) -> String {
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_nan() {
        return format!("{sign}nan");
    }
    if x.is_infinite() {
        return format!("{sign}inf");
    }
    if x == 0. {
        return format!("{sign}0");
    }

    // rounding to the target digits first decides which form is used
    let sci = format!("{:.*e}", PRECISION - 1, x);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION as i32 {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{exp_sign}{:02}",
            strip_fraction_zeros(mantissa),
            exp.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        strip_fraction_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

#[test]
fn test_format_integral() {
    assert_eq!(format_general(2.), "2");
    assert_eq!(format_general(1.), "1");
    assert_eq!(format_general(-1.), "-1");
    assert_eq!(format_general(100000.), "100000");
    assert_eq!(format_general(-46341.), "-46341");
}

#[test]
fn test_format_fraction() {
    assert_eq!(format_general(0.5), "0.5");
    assert_eq!(format_general(-2.5), "-2.5");
    assert_eq!(format_general(std::f64::consts::SQRT_2), "1.41421");
    assert_eq!(format_general(0.0001), "0.0001");
    assert_eq!(format_general(123.456789), "123.457");
}

#[test]
fn test_format_exponent() {
    assert_eq!(format_general(1000000.), "1e+06");
    assert_eq!(format_general(123456789.), "1.23457e+08");
    assert_eq!(format_general(0.00001), "1e-05");
    assert_eq!(format_general(-2.5e-7), "-2.5e-07");
    assert_eq!(format_general(1e100), "1e+100");
    // 999999.5 rounds up to seven digits and so switches form
    assert_eq!(format_general(999999.5), "1e+06");
}

#[test]
fn test_format_special() {
    assert_eq!(format_general(0.), "0");
    assert_eq!(format_general(-0.), "-0");
    assert_eq!(format_general(f64::INFINITY), "inf");
    assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_general(f64::NAN.copysign(1.)), "nan");
    assert_eq!(format_general(f64::NAN.copysign(-1.)), "-nan");
}

#[test]
fn test_write_real() {
    let mut out = vec![];
    write_roots(&mut out, Some(Roots::Real { x1: 2., x2: 1. })).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{REAL}\nx1 = 2\nx2 = 1\n")
    );
}

#[test]
fn test_write_complex() {
    let mut out = vec![];
    write_roots(&mut out, Some(Roots::Complex)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{COMPLEX}\n"));
}

#[test]
fn test_write_nothing() {
    let mut out = vec![];
    write_roots(&mut out, None).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_banner_has_no_trailing_newline() {
    let mut out = vec![];
    write_banner(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, format!("{BANNER}\n{PROMPT}"));
    assert!(out.ends_with(": "));
}
