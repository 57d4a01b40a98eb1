use crate::error::{Error, Result};
use crate::solve::Coefficients;

use std::io::BufRead;

const NAMES: [char; 3] = ['a', 'b', 'c'];

/// Reads `a`, `b` and `c` as whitespace separated integers, possibly spread
/// over several lines. Only whole lines are consumed, and nothing past the
/// line holding `c`. Bytes that are not UTF-8 surface as [`Error::Io`].
pub fn read_coefficients(input: &mut impl BufRead) -> Result<Coefficients> {
    let mut vals = [0i32; 3];
    let mut n = 0;
    let mut line = String::new();
    while n < vals.len() {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::MissingCoefficient { name: NAMES[n] });
        }
        for token in line.split_whitespace().take(vals.len() - n) {
            vals[n] = token.parse().map_err(|_| Error::InvalidCoefficient {
                name: NAMES[n],
                token: token.to_string(),
            })?;
            n += 1;
        }
    }
    Ok(vals.into())
}

#[test]
fn test_single_line() {
    let c = read_coefficients(&mut "1 -3 2\n".as_bytes()).unwrap();
    assert_eq!(c, Coefficients::new(1, -3, 2));
}

#[test]
fn test_spread_over_lines() {
    let c = read_coefficients(&mut "\n  4\n\t-5   \n+6".as_bytes()).unwrap();
    assert_eq!(c, Coefficients::new(4, -5, 6));
}

#[test]
fn test_stops_after_third_line() {
    let mut input = "1 2\n3 junk\nleft over\n".as_bytes();
    let c = read_coefficients(&mut input).unwrap();
    assert_eq!(c, Coefficients::new(1, 2, 3));
    assert_eq!(input, b"left over\n");
}

#[test]
fn test_missing() {
    let err = read_coefficients(&mut "7 8".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MissingCoefficient { name: 'c' }));
    let err = read_coefficients(&mut "".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MissingCoefficient { name: 'a' }));
}

#[test]
fn test_invalid() {
    let err = read_coefficients(&mut "1 2.5 3".as_bytes()).unwrap_err();
    match err {
        Error::InvalidCoefficient { name, token } => {
            assert_eq!(name, 'b');
            assert_eq!(token, "2.5");
        }
        e => panic!("unexpected error {e}"),
    }
    let err = read_coefficients(&mut "1 2 x".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidCoefficient { name: 'c', .. }));
}

#[test]
fn test_out_of_range() {
    let err = read_coefficients(&mut "2147483648 0 0".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidCoefficient { name: 'a', .. }));
    let c = read_coefficients(&mut "-2147483648 2147483647 0".as_bytes()).unwrap();
    assert_eq!(c, Coefficients::new(i32::MIN, i32::MAX, 0));
}

#[test]
fn test_not_utf8() {
    let err = read_coefficients(&mut &b"1 \xff 3\n"[..]).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        e => panic!("unexpected error {e}"),
    }
}
