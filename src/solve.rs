use super::F;

/// Integer coefficients of `ax^2 + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coefficients {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Coefficients {
    #[inline]
    pub fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }
    /// With `a == 0` this is not a quadratic and nothing is solved.
    #[inline]
    pub fn is_quadratic(&self) -> bool {
        self.a != 0
    }
}

impl From<[i32; 3]> for Coefficients {
    fn from([a, b, c]: [i32; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// How the discriminant and the roots are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arithmetic {
    /// 32-bit wrapping integers for the discriminant, single precision for roots.
    #[default]
    Native,
    /// Exact discriminant, double precision for roots.
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// `x1` always takes `+sqrt(D)`.
    Real { x1: f64, x2: f64 },
    Complex,
}

impl Roots {
    pub fn is_real(&self) -> bool {
        matches!(self, Roots::Real { .. })
    }
}

/// `b^2 - 4ac`. Native arithmetic wraps on overflow exactly like 32-bit
/// two's complement, so the sign here is what selects the branch in [`solve`].
pub fn discriminant(Coefficients { a, b, c }: Coefficients, arith: Arithmetic) -> i128 {
    match arith {
        Arithmetic::Native => native_discriminant(a, b, c) as i128,
        Arithmetic::Wide => {
            let (a, b, c) = (a as i128, b as i128, c as i128);
            b * b - 4 * a * c
        }
    }
}

#[inline]
fn native_discriminant(a: i32, b: i32, c: i32) -> i32 {
    b.wrapping_mul(b)
        .wrapping_sub(4i32.wrapping_mul(a).wrapping_mul(c))
}

/// Returns `None` when `a == 0`.
pub fn solve(coeffs: Coefficients, arith: Arithmetic) -> Option<Roots> {
    if !coeffs.is_quadratic() {
        return None;
    }
    let Coefficients { a, b, c } = coeffs;
    let roots = match arith {
        Arithmetic::Native => {
            let d = native_discriminant(a, b, c);
            if d < 0 {
                return Some(Roots::Complex);
            }
            // sqrt is taken in double precision and then narrowed
            let sqrt_d = (d as f64).sqrt() as F;
            let neg_b = b.wrapping_neg() as F;
            let denom = 2i32.wrapping_mul(a) as F;
            Roots::Real {
                x1: ((neg_b + sqrt_d) / denom) as f64,
                x2: ((neg_b - sqrt_d) / denom) as f64,
            }
        }
        Arithmetic::Wide => {
            let d = discriminant(coeffs, arith);
            if d < 0 {
                return Some(Roots::Complex);
            }
            let sqrt_d = (d as f64).sqrt();
            let neg_b = -(b as f64);
            let denom = 2. * a as f64;
            Roots::Real {
                x1: (neg_b + sqrt_d) / denom,
                x2: (neg_b - sqrt_d) / denom,
            }
        }
    };
    Some(roots)
}

#[test]
fn test_linear_is_skipped() {
    for [b, c] in [[0, 0], [3, -7], [i32::MAX, i32::MIN]] {
        let coeffs = Coefficients::new(0, b, c);
        assert_eq!(solve(coeffs, Arithmetic::Native), None);
        assert_eq!(solve(coeffs, Arithmetic::Wide), None);
    }
}

#[test]
fn test_distinct_real_roots() {
    let coeffs = Coefficients::new(1, -3, 2);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), 1);
    assert_eq!(
        solve(coeffs, Arithmetic::Native),
        Some(Roots::Real { x1: 2., x2: 1. })
    );
    assert_eq!(
        solve(coeffs, Arithmetic::Wide),
        Some(Roots::Real { x1: 2., x2: 1. })
    );
}

#[test]
fn test_zero_discriminant_is_real() {
    let coeffs = Coefficients::new(1, 2, 1);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), 0);
    assert_eq!(
        solve(coeffs, Arithmetic::Native),
        Some(Roots::Real { x1: -1., x2: -1. })
    );
}

#[test]
fn test_complex_roots() {
    let coeffs = Coefficients::new(1, 0, 1);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), -4);
    assert_eq!(solve(coeffs, Arithmetic::Native), Some(Roots::Complex));
}

#[test]
fn test_negative_leading_coefficient() {
    // -x^2 + 5x - 6 = 0, roots 2 and 3; 2a < 0 puts the smaller root first
    let coeffs = Coefficients::new(-1, 5, -6);
    assert_eq!(
        solve(coeffs, Arithmetic::Native),
        Some(Roots::Real { x1: 2., x2: 3. })
    );
}

#[test]
fn test_native_discriminant_wraps() {
    // 65536^2 == 2^32 wraps to 0 in 32 bits
    let coeffs = Coefficients::new(1, 65536, 0);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), 0);
    assert_eq!(discriminant(coeffs, Arithmetic::Wide), 1i128 << 32);
    assert!(solve(coeffs, Arithmetic::Native).unwrap().is_real());

    // 46341^2 overflows past i32::MAX into negative territory
    let coeffs = Coefficients::new(1, 46341, 0);
    assert!(discriminant(coeffs, Arithmetic::Native) < 0);
    assert_eq!(solve(coeffs, Arithmetic::Native), Some(Roots::Complex));
    assert_eq!(
        solve(coeffs, Arithmetic::Wide),
        Some(Roots::Real { x1: 0., x2: -46341. })
    );
}

#[test]
fn test_branch_follows_sign() {
    for a in [-7, -1, 1, 3, 1000] {
        for b in [-40000, -9, -2, 0, 2, 9, 50000] {
            for c in [-30000, -4, 0, 1, 5, 70000] {
                let coeffs = Coefficients::new(a, b, c);
                let (a, b, c) = (a as i64, b as i64, c as i64);
                let exact = b * b - 4 * a * c;
                // truncating to 32 bits gives the two's complement wrapped value
                let wrapped = exact as i32;

                let native = solve(coeffs, Arithmetic::Native).unwrap();
                assert_eq!(native.is_real(), wrapped >= 0, "{coeffs:?}");
                let wide = solve(coeffs, Arithmetic::Wide).unwrap();
                assert_eq!(wide.is_real(), exact >= 0, "{coeffs:?}");
            }
        }
    }
}

#[test]
fn test_native_rounds_in_single_precision() {
    // x^2 - 2 = 0
    let Some(Roots::Real { x1, x2 }) = solve(Coefficients::new(1, 0, -2), Arithmetic::Native)
    else {
        panic!("expected real roots");
    };
    assert_eq!(x1, (2f64.sqrt() as F) as f64);
    assert_eq!(x2, -x1);
    let Some(Roots::Real { x1: wide, .. }) = solve(Coefficients::new(1, 0, -2), Arithmetic::Wide)
    else {
        panic!("expected real roots");
    };
    assert_eq!(wide, 2f64.sqrt());
}

#[test]
fn test_min_leading_coefficient_wraps_denominator() {
    // 2a and 4a both wrap to 0, so D = b^2 and every root divides by zero
    let coeffs = Coefficients::new(i32::MIN, 5, 3);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), 25);
    let Some(Roots::Real { x1, x2 }) = solve(coeffs, Arithmetic::Native) else {
        panic!("expected real roots");
    };
    assert!(x1.is_nan());
    assert_eq!(x2, f64::NEG_INFINITY);

    let coeffs = Coefficients::new(i32::MIN, 0, -1);
    assert_eq!(discriminant(coeffs, Arithmetic::Native), 0);
    let Some(Roots::Real { x1, x2 }) = solve(coeffs, Arithmetic::Native) else {
        panic!("expected real roots");
    };
    assert!(x1.is_nan());
    assert!(x2.is_nan());

    // exact arithmetic sees D = -2^33
    assert_eq!(discriminant(coeffs, Arithmetic::Wide), -(1i128 << 33));
    assert_eq!(solve(coeffs, Arithmetic::Wide), Some(Roots::Complex));
}
