//! Laplace-domain well-test reservoir models.
//!
//! Dimensionless wellbore-pressure solutions `p_wD(u)` for classical
//! pressure-transient models, each implementing
//! [`LaplaceTransform`](crate::core::LaplaceTransform) so any inversion engine
//! can produce the type-curve response `p_wD(t_D)`. The inversion engines do not
//! depend on this module; it stands in for the external reservoir-model
//! collaborator in tests, benchmarks, and examples.
//!
//! All models are expressed per unit rate with wellbore storage `C_D` and skin
//! `S` applied at the sand face. References: van Everdingen and Hurst (1949);
//! Agarwal, Al-Hussainy, and Ramey (1970); Warren and Root (1963).

use num_complex::Complex;

use crate::core::LaplaceTransform;
use crate::math::bessel::{i0, i1, k0, k1};

/// Outer boundary condition of a finite reservoir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterBoundary {
    /// No-flow outer boundary.
    Closed,
    /// Constant-pressure outer boundary (e.g. strong aquifer support).
    ConstantPressure,
}

/// Infinite-acting radial reservoir, full line-sink solution with storage and skin.
///
/// `p_wD(u) = [K0(su) + S su K1(su)] / { u [su K1(su) + C_D u (K0(su) + S su K1(su))] }`
/// with `su = sqrt(u)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteRadial {
    /// Dimensionless wellbore storage coefficient `C_D`.
    pub storage: f64,
    /// Skin factor `S`.
    pub skin: f64,
}

impl LaplaceTransform for InfiniteRadial {
    fn eval(&self, u: Complex<f64>) -> Complex<f64> {
        let su = u.sqrt();
        let sandface = k0(su) + self.skin * su * k1(su);
        sandface / (u * (su * k1(su) + self.storage * u * sandface))
    }
}

/// Infinite-acting radial reservoir, simplified line-source solution.
///
/// `p_wD(u) = [K0(su) + S] / { u [1 + C_D u (K0(su) + S)] }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSource {
    /// Dimensionless wellbore storage coefficient `C_D`.
    pub storage: f64,
    /// Skin factor `S`.
    pub skin: f64,
}

impl LaplaceTransform for LineSource {
    fn eval(&self, u: Complex<f64>) -> Complex<f64> {
        let sandface = k0(u.sqrt()) + self.skin;
        sandface / (u * (1.0 + self.storage * u * sandface))
    }
}

/// Dual-porosity (Warren-Root) reservoir with pseudo-steady interporosity flow.
///
/// The line-source solution evaluated at `u f(u)` with the transfer function
/// `f(u) = [omega (1 - omega) u + lambda] / [(1 - omega) u + lambda]`.
/// With `omega = 1` the matrix vanishes and the model reduces to [`LineSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPorosity {
    /// Dimensionless wellbore storage coefficient `C_D`.
    pub storage: f64,
    /// Skin factor `S`.
    pub skin: f64,
    /// Fracture storativity ratio `omega` in (0, 1].
    pub storativity_ratio: f64,
    /// Interporosity flow coefficient `lambda`.
    pub interporosity: f64,
}

impl DualPorosity {
    /// Matrix-fracture transfer function `f(u)`.
    pub fn transfer(&self, u: Complex<f64>) -> Complex<f64> {
        let omega = self.storativity_ratio;
        let lambda = self.interporosity;
        (omega * (1.0 - omega) * u + lambda) / ((1.0 - omega) * u + lambda)
    }
}

impl LaplaceTransform for DualPorosity {
    fn eval(&self, u: Complex<f64>) -> Complex<f64> {
        let sandface = k0((u * self.transfer(u)).sqrt()) + self.skin;
        sandface / (u * (1.0 + self.storage * u * sandface))
    }
}

/// Finite radial reservoir of dimensionless radius `r_eD` with a closed or
/// constant-pressure outer boundary.
///
/// The `I0`/`K0` combination grows like `exp(r_eD sqrt(u))`; keep
/// `r_eD * |sqrt(u)|` under ~700 (the `f64` exponent range) or the boundary
/// terms overflow. Late-time evaluation of realistic radii is well inside that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteRadial {
    /// Dimensionless wellbore storage coefficient `C_D`.
    pub storage: f64,
    /// Skin factor `S`.
    pub skin: f64,
    /// Dimensionless outer radius `r_eD > 1`.
    pub radius: f64,
    /// Outer boundary condition.
    pub boundary: OuterBoundary,
}

impl LaplaceTransform for FiniteRadial {
    fn eval(&self, u: Complex<f64>) -> Complex<f64> {
        let su = u.sqrt();
        let sr = su * self.radius;
        let flow = match self.boundary {
            OuterBoundary::Closed => {
                su * (k1(su) * i0(sr) - k0(sr) * i1(su)) / (k1(su) * i0(sr) + k0(sr) * i0(su))
            }
            OuterBoundary::ConstantPressure => {
                su * (k1(su) * i0(sr) + k0(sr) * i1(su)) / (k1(su) * i0(sr) - k0(sr) * i0(su))
            }
        };
        let sandface = 1.0 + self.skin * flow;
        sandface / (u * (flow + self.storage * u * sandface))
    }
}
