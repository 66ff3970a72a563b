//! Enum-based kernel dispatch for static (non-virtual) function calls.
//!
//! The kernel variant set is small and closed, so the classifier stores a
//! `KernelEnum` and dispatches without vtable lookups in its scoring loop.

use nalgebra::DVector;

use super::polynomial::PolynomialKernel;
use super::rbf::RbfKernel;
use super::traits::Kernel;

/// Enum-based kernel for static dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelEnum {
    Polynomial(PolynomialKernel),
    Rbf(RbfKernel),
}

impl KernelEnum {
    #[inline(always)]
    pub fn compute(&self, a: &DVector<f64>, b: &DVector<f64>) -> f64 {
        match self {
            KernelEnum::Polynomial(k) => k.compute(a, b),
            KernelEnum::Rbf(k) => k.compute(a, b),
        }
    }
}

// Implement the Kernel trait for KernelEnum so it can be used wherever a
// generic kernel is accepted
impl Kernel for KernelEnum {
    #[inline(always)]
    fn compute(&self, a: &DVector<f64>, b: &DVector<f64>) -> f64 {
        KernelEnum::compute(self, a, b)
    }
}
