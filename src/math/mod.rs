//! Numerical kernels shared by the inversion engines and well-test models.

pub mod bessel;
pub mod fft;
pub mod quadrature;
