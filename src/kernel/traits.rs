//! Kernel trait for the region classifier.

use nalgebra::DVector;

/// Similarity function between two feature vectors.
///
/// Kernels are immutable once constructed: `compute` is a pure function of
/// its two arguments and the kernel's fixed parameters, symmetric in `a`
/// and `b`.
///
/// Feeding vectors of different lengths is a contract violation and panics;
/// it is not a recoverable condition.
pub trait Kernel: Send + Sync {
    /// Evaluate the kernel on two feature vectors of equal dimension.
    fn compute(&self, a: &DVector<f64>, b: &DVector<f64>) -> f64;
}
