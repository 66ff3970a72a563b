//! Kernel-machine classifier for candidate regions.

use log::debug;
use nalgebra::DVector;

use crate::kernel::{try_kernel_by_name, KernelEnum};
use crate::{Error, Result};

/// RVM-style kernel classifier.
///
/// Scores a feature vector as a signed hyperplane distance, a weighted sum
/// of kernel evaluations against a learned set of support vectors, and
/// thresholds that distance into a boolean decision.
///
/// The classifier is immutable during classification and safe to share
/// read-only between concurrent scoring calls. Its parameter arrays are
/// installed as a unit through [`RvmClassifier::set_parameters`], never
/// piecewise, so `support_vectors.len() == coefficients.len()` always
/// holds.
#[derive(Debug, Clone)]
pub struct RvmClassifier {
    kernel: KernelEnum,
    support_vectors: Vec<DVector<f64>>,
    coefficients: Vec<f64>,
    bias: f64,
    threshold: f64,
}

impl RvmClassifier {
    /// Create a classifier with no support vectors yet.
    ///
    /// An empty classifier is legal: its hyperplane distance degenerates to
    /// `-bias` for every input.
    pub fn new(kernel: KernelEnum) -> Self {
        Self {
            kernel,
            support_vectors: Vec::new(),
            coefficients: Vec::new(),
            bias: 0.0,
            threshold: 0.0,
        }
    }

    /// Install support vectors, coefficients, and bias as a unit.
    ///
    /// Rejects mismatched array lengths and mixed support-vector dimensions
    /// without touching the previously installed parameters, so a failed
    /// call can never leave the classifier half-updated.
    pub fn set_parameters(
        &mut self,
        support_vectors: Vec<DVector<f64>>,
        coefficients: Vec<f64>,
        bias: f64,
    ) -> Result<()> {
        if support_vectors.len() != coefficients.len() {
            return Err(Error::InvalidClassifier(format!(
                "{} support vectors but {} coefficients",
                support_vectors.len(),
                coefficients.len()
            )));
        }

        if let Some(first) = support_vectors.first() {
            let dim = first.len();
            for (i, sv) in support_vectors.iter().enumerate() {
                if sv.len() != dim {
                    return Err(Error::InvalidClassifier(format!(
                        "support vector {} has dimension {}, expected {}",
                        i,
                        sv.len(),
                        dim
                    )));
                }
            }
        }

        self.support_vectors = support_vectors;
        self.coefficients = coefficients;
        self.bias = bias;
        Ok(())
    }

    /// Set the decision threshold applied to the hyperplane distance.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// The decision threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The bias subtracted from the weighted kernel sum.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of installed support vectors.
    pub fn support_vector_count(&self) -> usize {
        self.support_vectors.len()
    }

    /// Compute the signed distance of a feature vector to the decision
    /// hyperplane.
    ///
    /// `distance = -bias + sum_i coefficients[i] * kernel(fv, sv[i])`
    ///
    /// This is the dominant per-candidate cost of a tracking step, linear
    /// in the number of support vectors, and performs no allocation.
    pub fn compute_hyperplane_distance(&self, feature_vector: &DVector<f64>) -> f64 {
        let mut distance = -self.bias;
        for (coefficient, support_vector) in self.coefficients.iter().zip(&self.support_vectors) {
            distance += coefficient * self.kernel.compute(feature_vector, support_vector);
        }
        distance
    }

    /// Classify a feature vector.
    pub fn classify(&self, feature_vector: &DVector<f64>) -> bool {
        self.classify_distance(self.compute_hyperplane_distance(feature_vector))
    }

    /// Classify a precomputed hyperplane distance.
    ///
    /// Callers that need both the raw score and the decision use this to
    /// avoid evaluating the kernel sum twice; the outcome is identical to
    /// [`RvmClassifier::classify`].
    pub fn classify_distance(&self, hyperplane_distance: f64) -> bool {
        hyperplane_distance >= self.threshold
    }
}

/// Fully-parsed classifier parameter set, as delivered by an external
/// loader.
///
/// The core does not read parameter files; whatever loads them hands over
/// this bundle, and [`ClassifierBundle::build`] validates the whole of it
/// before a classifier exists. A malformed bundle never produces a
/// partially-initialized classifier.
#[derive(Debug, Clone)]
pub struct ClassifierBundle {
    /// Kernel type tag: `"polynomial"` or `"rbf"`.
    pub kernel_type: String,

    /// Numeric kernel parameters, in the order the kernel expects them.
    pub kernel_params: Vec<f64>,

    /// Support-vector feature vectors, parallel to `coefficients`.
    pub support_vectors: Vec<DVector<f64>>,

    /// One weight per support vector.
    pub coefficients: Vec<f64>,

    /// Bias of the decision hyperplane.
    pub bias: f64,

    /// Decision threshold.
    pub threshold: f64,
}

impl ClassifierBundle {
    /// Validate the bundle and build the classifier.
    pub fn build(self) -> Result<RvmClassifier> {
        let kernel = try_kernel_by_name(&self.kernel_type, &self.kernel_params)?;

        let mut classifier = RvmClassifier::new(kernel);
        classifier.set_parameters(self.support_vectors, self.coefficients, self.bias)?;
        classifier.set_threshold(self.threshold);

        debug!(
            "built {} classifier with {} support vectors",
            self.kernel_type,
            classifier.support_vector_count()
        );
        Ok(classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{PolynomialKernel, RbfKernel};
    use approx::assert_relative_eq;

    fn rbf_classifier() -> RvmClassifier {
        // One support vector [1, 0], coefficient 2.0, bias 0.5, gamma 1.0.
        let mut classifier = RvmClassifier::new(KernelEnum::Rbf(RbfKernel::new(1.0)));
        classifier
            .set_parameters(vec![DVector::from_vec(vec![1.0, 0.0])], vec![2.0], 0.5)
            .unwrap();
        classifier
    }

    #[test]
    fn test_empty_classifier_distance_is_negative_bias() {
        let mut classifier = RvmClassifier::new(KernelEnum::Polynomial(PolynomialKernel::linear()));
        classifier.set_parameters(vec![], vec![], 0.75).unwrap();

        let fv = DVector::from_vec(vec![3.0, -1.0, 2.0]);
        assert_relative_eq!(classifier.compute_hyperplane_distance(&fv), -0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_rbf_scenario() {
        let classifier = rbf_classifier();

        // kernel(f, sv) = exp(0) = 1, distance = -0.5 + 2 * 1 = 1.5
        let fv = DVector::from_vec(vec![1.0, 0.0]);
        let distance = classifier.compute_hyperplane_distance(&fv);

        assert_relative_eq!(distance, 1.5, epsilon = 1e-12);
        assert!(classifier.classify(&fv));
    }

    #[test]
    fn test_classify_agrees_with_precomputed_distance() {
        let classifier = rbf_classifier();

        for raw in [[1.0, 0.0], [0.0, 0.0], [-4.0, 3.0], [100.0, -100.0]] {
            let fv = DVector::from_vec(raw.to_vec());
            let distance = classifier.compute_hyperplane_distance(&fv);
            assert_eq!(
                classifier.classify(&fv),
                classifier.classify_distance(distance),
                "decision must not depend on which entry point computed the distance"
            );
        }
    }

    #[test]
    fn test_threshold_shifts_decision() {
        let mut classifier = rbf_classifier();
        let fv = DVector::from_vec(vec![1.0, 0.0]);

        assert!(classifier.classify(&fv), "distance 1.5 >= 0.0");

        classifier.set_threshold(2.0);
        assert!(!classifier.classify(&fv), "distance 1.5 < 2.0");
    }

    #[test]
    fn test_set_parameters_rejects_mismatched_lengths() {
        let mut classifier = RvmClassifier::new(KernelEnum::Rbf(RbfKernel::new(1.0)));
        let result = classifier.set_parameters(
            vec![DVector::from_vec(vec![1.0]), DVector::from_vec(vec![2.0])],
            vec![1.0],
            0.0,
        );

        assert!(matches!(result, Err(Error::InvalidClassifier(_))));
        assert_eq!(classifier.support_vector_count(), 0, "failed install must not partially apply");
    }

    #[test]
    fn test_set_parameters_rejects_mixed_dimensions() {
        let mut classifier = RvmClassifier::new(KernelEnum::Rbf(RbfKernel::new(1.0)));
        let result = classifier.set_parameters(
            vec![DVector::from_vec(vec![1.0, 2.0]), DVector::from_vec(vec![3.0])],
            vec![1.0, 1.0],
            0.0,
        );

        assert!(matches!(result, Err(Error::InvalidClassifier(_))));
    }

    #[test]
    fn test_bundle_build() {
        let bundle = ClassifierBundle {
            kernel_type: "rbf".to_string(),
            kernel_params: vec![1.0],
            support_vectors: vec![DVector::from_vec(vec![1.0, 0.0])],
            coefficients: vec![2.0],
            bias: 0.5,
            threshold: 0.0,
        };

        let classifier = bundle.build().unwrap();
        assert_eq!(classifier.support_vector_count(), 1);
        assert_relative_eq!(classifier.bias(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bundle_rejects_unknown_kernel() {
        let bundle = ClassifierBundle {
            kernel_type: "histogram-intersection".to_string(),
            kernel_params: vec![],
            support_vectors: vec![],
            coefficients: vec![],
            bias: 0.0,
            threshold: 0.0,
        };

        assert!(matches!(bundle.build(), Err(Error::UnknownKernel(_))));
    }

    #[test]
    fn test_bundle_rejects_mismatched_arrays() {
        let bundle = ClassifierBundle {
            kernel_type: "rbf".to_string(),
            kernel_params: vec![1.0],
            support_vectors: vec![DVector::from_vec(vec![1.0])],
            coefficients: vec![1.0, 2.0],
            bias: 0.0,
            threshold: 0.0,
        };

        assert!(matches!(bundle.build(), Err(Error::InvalidClassifier(_))));
    }
}
