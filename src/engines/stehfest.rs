//! Gaver-Stehfest inversion: a fixed-order weighted sum over real abscissas.
//!
//! `f(t) ~ (ln 2 / t) * sum_{i=1}^{N} V_i * F(i ln 2 / t)` with weights `V_i`
//! depending only on the even order `N`. The method evaluates the transform on the
//! positive real axis only, which suits smooth, monotonically bounded
//! pressure-response signals; it degrades quickly on oscillatory ones.
//!
//! Weights are exact rationals; every factorial product is carried in `i128`
//! and divided once, so recomputation is bit-deterministic. Orders above 16 are
//! refused outright: the factorial terms outgrow the exactly representable
//! integer range of `f64` and the alternating sum silently turns into
//! large-magnitude garbage, so the order cap is enforced rather than guessed
//! around. Reference: Stehfest (1970), Algorithm 368.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use num_complex::Complex;

use crate::core::{check_finite, InversionEngine, InversionError, InversionResult, LaplaceTransform};

/// Default Stehfest order.
pub const DEFAULT_ORDER: usize = 10;
/// Largest order with exact weight arithmetic in double precision.
pub const MAX_ORDER: usize = 16;

static WEIGHT_CACHE: OnceLock<Mutex<HashMap<usize, Arc<Vec<f64>>>>> = OnceLock::new();

fn validate_order(order: usize) -> InversionResult<()> {
    if order == 0 || order % 2 != 0 {
        return Err(InversionError::InvalidInput(format!(
            "stehfest order must be a positive even number, got {order}"
        )));
    }
    if order > MAX_ORDER {
        return Err(InversionError::InvalidInput(format!(
            "stehfest order {order} exceeds {MAX_ORDER}: factorial weights overflow double precision"
        )));
    }
    Ok(())
}

/// Computes (or fetches from the process-wide cache) the weight vector for an
/// even `order <= 16`. Index 0 is unused padding so `V[i]` matches the textbook
/// 1-based indexing.
pub fn stehfest_weights(order: usize) -> InversionResult<Arc<Vec<f64>>> {
    validate_order(order)?;

    let cache = WEIGHT_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().expect("stehfest weight cache lock poisoned");
    if let Some(weights) = guard.get(&order) {
        return Ok(Arc::clone(weights));
    }

    let half = order / 2;
    let mut factorial = [1i128; MAX_ORDER + 1];
    for i in 1..=order {
        factorial[i] = factorial[i - 1] * i as i128;
    }

    let mut weights = vec![0.0; order + 1];
    for i in 1..=order {
        let mut acc = 0.0;
        for k in (i + 1) / 2..=i.min(half) {
            let numerator = (k as i128).pow(half as u32) * factorial[2 * k];
            let denominator = factorial[half - k]
                * factorial[k]
                * factorial[k - 1]
                * factorial[i - k]
                * factorial[2 * k - i];
            acc += numerator as f64 / denominator as f64;
        }
        weights[i] = if (half + i) % 2 == 0 { acc } else { -acc };
    }

    let weights = Arc::new(weights);
    guard.insert(order, Arc::clone(&weights));
    Ok(weights)
}

/// Gaver-Stehfest inversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StehfestEngine {
    /// Even summation order `N`; each `invert` costs `N` transform evaluations.
    pub order: usize,
}

impl Default for StehfestEngine {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

impl StehfestEngine {
    /// Engine with an explicit order; the order is validated on first use.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Inverts the transform at a single time point.
    pub fn invert_one<F>(&self, transform: &F, t: f64) -> InversionResult<f64>
    where
        F: LaplaceTransform + ?Sized,
    {
        let weights = stehfest_weights(self.order)?;
        if !t.is_finite() || t <= 0.0 {
            return Err(InversionError::InvalidInput(format!(
                "stehfest requires t > 0, got {t}"
            )));
        }

        let ln2_over_t = std::f64::consts::LN_2 / t;
        let mut sum = 0.0;
        for i in 1..=self.order {
            let s = Complex::new(i as f64 * ln2_over_t, 0.0);
            let value = check_finite(s, transform.eval(s))?;
            sum += weights[i] * value.re;
        }
        Ok(ln2_over_t * sum)
    }

    /// Inverts the transform at each requested time, preserving input order.
    pub fn invert_many<F>(&self, transform: &F, times: &[f64]) -> InversionResult<Vec<f64>>
    where
        F: LaplaceTransform + ?Sized,
    {
        times
            .iter()
            .map(|&t| self.invert_one(transform, t))
            .collect()
    }
}

impl InversionEngine for StehfestEngine {
    fn invert(&self, transform: &dyn LaplaceTransform, t: f64) -> InversionResult<f64> {
        self.invert_one(transform, t)
    }
}
