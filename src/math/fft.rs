//! Inverse-FFT plumbing with process-wide plan caching.
//!
//! The den Iseger block inversion recovers a whole window of time samples from a real
//! frequency sequence; plan construction dominates small transforms, so plans are cached
//! per length and scratch buffers are reused per thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

static INVERSE_PLAN_CACHE: OnceLock<Mutex<HashMap<usize, Arc<dyn Fft<f64>>>>> = OnceLock::new();

thread_local! {
    static INVERSE_SCRATCH: RefCell<HashMap<usize, Vec<Complex<f64>>>> =
        RefCell::new(HashMap::new());
}

fn inverse_plan(n: usize) -> Arc<dyn Fft<f64>> {
    let cache = INVERSE_PLAN_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().expect("inverse FFT plan cache lock poisoned");
    if let Some(plan) = guard.get(&n) {
        return Arc::clone(plan);
    }

    let mut planner = FftPlanner::<f64>::new();
    let plan = planner.plan_fft_inverse(n);
    guard.insert(n, Arc::clone(&plan));
    plan
}

/// In-place inverse DFT with `1/n` normalization: `x[l] = (1/n) * sum_k X[k] e^{2 pi i l k / n}`.
pub fn ifft_inplace(values: &mut [Complex<f64>]) {
    let n = values.len();
    assert!(n.is_power_of_two(), "ifft length must be power-of-two");

    let plan = inverse_plan(n);
    let scratch_len = plan.get_inplace_scratch_len();

    INVERSE_SCRATCH.with(|cache| {
        let mut cache = cache.borrow_mut();
        let scratch = cache.entry(n).or_default();
        if scratch.len() < scratch_len {
            scratch.resize(scratch_len, Complex::new(0.0, 0.0));
        }
        plan.process_with_scratch(values, &mut scratch[..scratch_len]);
    });

    let inv_n = 1.0 / n as f64;
    for x in values.iter_mut() {
        *x *= inv_n;
    }
}
