//! Core traits and library-wide result/error structures.

use num_complex::Complex;

/// Laplace-domain function contract consumed by every inversion engine.
///
/// Implementations must be deterministic and side-effect free over their domain;
/// behavior at poles of `F` is undefined and engines choose abscissas assuming the
/// caller has kept known singularities off the evaluation contour.
pub trait LaplaceTransform {
    /// Evaluates `F(s)` at a complex abscissa chosen by the engine.
    fn eval(&self, s: Complex<f64>) -> Complex<f64>;
}

impl<F> LaplaceTransform for F
where
    F: Fn(Complex<f64>) -> Complex<f64>,
{
    fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        self(s)
    }
}

/// Inversion engine abstraction: one Laplace-domain function in, one real sample out.
///
/// All engines are pure functions of `(transform, t, order parameters)`; call sites
/// may swap engines freely and sweep independent times on separate workers.
pub trait InversionEngine {
    /// Approximates `f(t)` for the transform `F`, with `t > 0`.
    fn invert(&self, transform: &dyn LaplaceTransform, t: f64) -> InversionResult<f64>;
}

/// Crate-wide result alias for inversion operations.
pub type InversionResult<T> = Result<T, InversionError>;

/// Errors surfaced by the inversion API.
///
/// Every variant is local to one call: cached weight and quadrature tables are
/// never corrupted and concurrent evaluations are unaffected. Partial results are
/// never returned; a call either yields a full valid result or one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum InversionError {
    /// Invalid order parameter or time point, rejected before any transform evaluation.
    InvalidInput(String),
    /// A guarded division inside a recursion met a zero or non-finite denominator,
    /// reported with the failing rank/index.
    NumericalBreakdown(String),
    /// The transform returned NaN or infinity at an abscissa the engine requested.
    NonFiniteTransform {
        /// The offending abscissa.
        s: Complex<f64>,
    },
}

impl std::fmt::Display for InversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalBreakdown(msg) => write!(f, "numerical breakdown: {msg}"),
            Self::NonFiniteTransform { s } => {
                write!(
                    f,
                    "transform returned a non-finite value at s = {} + {}i",
                    s.re, s.im
                )
            }
        }
    }
}

impl std::error::Error for InversionError {}

/// Checks one transform evaluation for finiteness, tagging failures with the abscissa.
pub(crate) fn check_finite(s: Complex<f64>, value: Complex<f64>) -> InversionResult<Complex<f64>> {
    if value.re.is_finite() && value.im.is_finite() {
        Ok(value)
    } else {
        Err(InversionError::NonFiniteTransform { s })
    }
}
