//! de Hoog inversion: contour Fourier series accelerated by a continued fraction.
//!
//! Per time point the transform is sampled at `2M + 1` points along the vertical
//! line `Re s = gamma`, the resulting series is converted to a continued fraction
//! through the quotient-difference algorithm, and the fraction is evaluated by the
//! forward convergent recurrence with a quadratic remainder correction on the last
//! term. All state is local to one call, so repeated calls are bit-identical.
//!
//! The quotient-difference table divides by its own entries; a zero (or non-finite)
//! denominator means the continued fraction broke down at that rank and the call
//! fails with [`InversionError::NumericalBreakdown`] instead of propagating NaN.
//! Reference: de Hoog, Knight, and Stokes (1982).

use num_complex::Complex;

use crate::core::{check_finite, InversionEngine, InversionError, InversionResult, LaplaceTransform};

/// Default series truncation `M` (the call evaluates the transform `2M + 1` times).
pub const DEFAULT_TERMS: usize = 40;
/// Hard cap on the truncation order.
pub const MAX_TERMS: usize = 60;
/// Default discretization tolerance controlling the contour shift.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Magnitudes below this count as a breakdown denominator.
const BREAKDOWN_EPS: f64 = 1e-290;

/// de Hoog inversion engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeHoogEngine {
    /// Series truncation order `M`.
    pub terms: usize,
    /// Discretization tolerance; sets the contour via `gamma = -ln(tol) / (2T)`.
    pub tolerance: f64,
}

impl Default for DeHoogEngine {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Flat triangular storage for the quotient-difference table: entry `(i, r)`
/// lives at `i * (terms + 1) + r`, avoiding nested per-call allocations.
struct QdTable {
    data: Vec<Complex<f64>>,
    stride: usize,
}

impl QdTable {
    fn new(rows: usize, stride: usize) -> Self {
        Self {
            data: vec![Complex::new(0.0, 0.0); rows * stride],
            stride,
        }
    }

    #[inline]
    fn get(&self, i: usize, r: usize) -> Complex<f64> {
        self.data[i * self.stride + r]
    }

    #[inline]
    fn set(&mut self, i: usize, r: usize, value: Complex<f64>) {
        self.data[i * self.stride + r] = value;
    }
}

fn is_breakdown(denominator: Complex<f64>) -> bool {
    !denominator.re.is_finite() || !denominator.im.is_finite() || denominator.norm() < BREAKDOWN_EPS
}

impl DeHoogEngine {
    /// Engine with explicit truncation order and tolerance, validated on first use.
    pub fn new(terms: usize, tolerance: f64) -> Self {
        Self { terms, tolerance }
    }

    fn validate(&self) -> InversionResult<()> {
        if self.terms == 0 || self.terms > MAX_TERMS {
            return Err(InversionError::InvalidInput(format!(
                "dehoog truncation order must be in 1..={MAX_TERMS}, got {}",
                self.terms
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance >= 1.0 {
            return Err(InversionError::InvalidInput(format!(
                "dehoog tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Inverts the transform at a single time point.
    pub fn invert_one<F>(&self, transform: &F, t: f64) -> InversionResult<f64>
    where
        F: LaplaceTransform + ?Sized,
    {
        self.validate()?;
        if !t.is_finite() || t <= 0.0 {
            return Err(InversionError::InvalidInput(format!(
                "dehoog requires t > 0, got {t}"
            )));
        }

        let m = self.terms;
        let n = 2 * m + 1;
        let period = 4.0 * t;
        let gamma = -self.tolerance.ln() / (2.0 * period);

        // Fourier coefficients along Re s = gamma; the constant term is halved.
        let mut coeff = Vec::with_capacity(n);
        for k in 0..n {
            let s = Complex::new(gamma, k as f64 * std::f64::consts::PI / period);
            coeff.push(check_finite(s, transform.eval(s))?);
        }
        coeff[0] *= 0.5;

        // Quotient-difference tables, rank r in 1..=m.
        let stride = m + 1;
        let mut q = QdTable::new(n, stride);
        let mut e = QdTable::new(n, stride);
        for i in 0..n - 1 {
            if is_breakdown(coeff[i]) {
                return Err(InversionError::NumericalBreakdown(format!(
                    "qd table rank 1: zero Fourier coefficient at index {i}"
                )));
            }
            q.set(i, 1, coeff[i + 1] / coeff[i]);
        }
        for r in 1..=m {
            for i in 0..n - 2 * r {
                let value = q.get(i + 1, r) - q.get(i, r) + e.get(i + 1, r - 1);
                e.set(i, r, value);
            }
            if r < m {
                for i in 0..n - 2 * r - 1 {
                    let denominator = e.get(i, r);
                    if is_breakdown(denominator) {
                        return Err(InversionError::NumericalBreakdown(format!(
                            "qd table rank {}: zero difference entry at index {i}",
                            r + 1
                        )));
                    }
                    q.set(i, r + 1, q.get(i + 1, r) * e.get(i + 1, r) / denominator);
                }
            }
        }

        // Continued-fraction coefficients d[0..=2m].
        let mut d = vec![Complex::new(0.0, 0.0); 2 * m + 1];
        d[0] = coeff[0];
        for rank in 1..=m {
            d[2 * rank - 1] = -q.get(0, rank);
            d[2 * rank] = -e.get(0, rank);
        }

        // Forward recurrence for the convergents; the final step applies the
        // quadratic remainder in place of the plain term.
        let z = Complex::new(0.0, std::f64::consts::PI * t / period).exp();
        let mut a_prev2 = Complex::new(0.0, 0.0);
        let mut b_prev2 = Complex::new(1.0, 0.0);
        let mut a_prev1 = d[0];
        let mut b_prev1 = Complex::new(1.0, 0.0);
        for step in 1..=2 * m {
            let (a_next, b_next) = if step == 2 * m {
                let h = 0.5 * (Complex::new(1.0, 0.0) + z * (d[2 * m - 1] - d[2 * m]));
                if is_breakdown(h) {
                    return Err(InversionError::NumericalBreakdown(
                        "remainder correction denominator vanished".to_string(),
                    ));
                }
                let r = -h * (Complex::new(1.0, 0.0)
                    - (Complex::new(1.0, 0.0) + z * d[2 * m] / (h * h)).sqrt());
                (a_prev1 + r * a_prev2, b_prev1 + r * b_prev2)
            } else {
                (a_prev1 + d[step] * z * a_prev2, b_prev1 + d[step] * z * b_prev2)
            };
            a_prev2 = a_prev1;
            b_prev2 = b_prev1;
            a_prev1 = a_next;
            b_prev1 = b_next;
        }

        if is_breakdown(b_prev1) {
            return Err(InversionError::NumericalBreakdown(format!(
                "convergent denominator vanished at term {}",
                2 * m
            )));
        }
        let value = (gamma * t).exp() / period * (a_prev1 / b_prev1).re;
        if !value.is_finite() {
            return Err(InversionError::NumericalBreakdown(
                "non-finite convergent ratio".to_string(),
            ));
        }
        Ok(value)
    }
}

impl InversionEngine for DeHoogEngine {
    fn invert(&self, transform: &dyn LaplaceTransform, t: f64) -> InversionResult<f64> {
        self.invert_one(transform, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sine_transform_matches_closed_form() {
        let f = |s: Complex<f64>| 1.0 / (s * s + 1.0);
        let engine = DeHoogEngine::default();
        for &t in &[0.1, 0.5, 1.0, 2.0, 3.0] {
            let ft = engine.invert_one(&f, t).unwrap();
            assert!((ft - t.sin()).abs() < 2e-8, "t = {t}");
        }
    }

    #[test]
    fn ramp_transform_matches_identity() {
        let f = |s: Complex<f64>| 1.0 / (s * s);
        let engine = DeHoogEngine::default();
        for &t in &[0.1, 1.0, 10.0] {
            assert_relative_eq!(engine.invert_one(&f, t).unwrap(), t, max_relative = 1e-6);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let f = |s: Complex<f64>| 1.0 / (s + 2.0);
        let engine = DeHoogEngine::default();
        let a = engine.invert_one(&f, 0.7).unwrap();
        let b = engine.invert_one(&f, 0.7).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn zero_transform_is_a_breakdown_not_a_nan() {
        let f = |_s: Complex<f64>| Complex::new(0.0, 0.0);
        let err = DeHoogEngine::default().invert_one(&f, 1.0).unwrap_err();
        assert!(matches!(err, InversionError::NumericalBreakdown(_)));
    }

    #[test]
    fn configuration_errors_come_before_evaluation() {
        let f = |_s: Complex<f64>| -> Complex<f64> { panic!("must not be evaluated") };
        assert!(matches!(
            DeHoogEngine::new(0, 1e-8).invert_one(&f, 1.0),
            Err(InversionError::InvalidInput(_))
        ));
        assert!(matches!(
            DeHoogEngine::new(61, 1e-8).invert_one(&f, 1.0),
            Err(InversionError::InvalidInput(_))
        ));
        assert!(matches!(
            DeHoogEngine::new(40, 0.0).invert_one(&f, 1.0),
            Err(InversionError::InvalidInput(_))
        ));
        assert!(matches!(
            DeHoogEngine::default().invert_one(&f, -1.0),
            Err(InversionError::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_transform_reports_the_abscissa() {
        let f = |_s: Complex<f64>| Complex::new(0.0, f64::INFINITY);
        let err = DeHoogEngine::default().invert_one(&f, 1.0).unwrap_err();
        assert!(matches!(err, InversionError::NonFiniteTransform { .. }));
    }
}
