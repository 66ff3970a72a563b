//! Polynomial kernel.

use nalgebra::DVector;

use super::traits::Kernel;

/// Polynomial kernel: `(scale * a.dot(b) + offset)^degree`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialKernel {
    /// Multiplier of the inner product.
    pub scale: f64,

    /// Constant added before exponentiation.
    pub offset: f64,

    /// Exponent of the polynomial.
    pub degree: i32,
}

impl PolynomialKernel {
    /// Create a new polynomial kernel.
    pub fn new(scale: f64, offset: f64, degree: i32) -> Self {
        Self { scale, offset, degree }
    }

    /// Plain inner-product kernel (`scale = 1`, `offset = 0`, `degree = 1`).
    pub fn linear() -> Self {
        Self::new(1.0, 0.0, 1)
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, a: &DVector<f64>, b: &DVector<f64>) -> f64 {
        assert_eq!(
            a.len(),
            b.len(),
            "kernel arguments must have equal dimension, got {} and {}",
            a.len(),
            b.len()
        );
        (self.scale * a.dot(b) + self.offset).powi(self.degree)
    }
}
