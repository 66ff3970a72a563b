//! Radial basis function kernel.

use nalgebra::DVector;

use super::traits::Kernel;

/// RBF (Gaussian) kernel: `exp(-gamma * ||a - b||^2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RbfKernel {
    /// Width parameter of the Gaussian.
    pub gamma: f64,
}

impl RbfKernel {
    /// Create a new RBF kernel.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Kernel for RbfKernel {
    fn compute(&self, a: &DVector<f64>, b: &DVector<f64>) -> f64 {
        assert_eq!(
            a.len(),
            b.len(),
            "kernel arguments must have equal dimension, got {} and {}",
            a.len(),
            b.len()
        );
        // Squared euclidean distance without a temporary vector; this runs
        // once per support vector per scored candidate region.
        let squared_distance: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum();
        (-self.gamma * squared_distance).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rbf_identical_vectors() {
        let kernel = RbfKernel::new(1.0);
        let a = DVector::from_vec(vec![1.0, 0.0]);

        // exp(0) = 1
        assert_relative_eq!(kernel.compute(&a, &a), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rbf_known_value() {
        let kernel = RbfKernel::new(0.5);
        let a = DVector::from_vec(vec![0.0, 0.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);

        // exp(-0.5 * 2) = exp(-1)
        assert_relative_eq!(kernel.compute(&a, &b), (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_rbf_is_symmetric() {
        let kernel = RbfKernel::new(2.0);
        let a = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![0.0, -1.0, 4.0]);

        assert_relative_eq!(kernel.compute(&a, &b), kernel.compute(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn test_rbf_decays_with_distance() {
        let kernel = RbfKernel::new(1.0);
        let origin = DVector::from_vec(vec![0.0, 0.0]);
        let near = DVector::from_vec(vec![0.5, 0.0]);
        let far = DVector::from_vec(vec![3.0, 0.0]);

        assert!(
            kernel.compute(&origin, &near) > kernel.compute(&origin, &far),
            "similarity must decrease with distance"
        );
    }
}
