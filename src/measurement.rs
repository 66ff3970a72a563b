//! Measurement seam: scoring a population through the classifier.
//!
//! Feature extraction belongs to the image collaborator, not to this crate;
//! [`FeatureExtractor`] is the whole interface the core asks of it.

use nalgebra::DVector;

use crate::classifier::RvmClassifier;
use crate::sample::Sample;

/// Provides the feature vector of a square region of the current frame.
///
/// Implemented by the caller over whatever pixel storage it uses. `None`
/// means the extractor cannot serve the region (for example a region that
/// straddles invalidated image data); such samples weigh nothing.
pub trait FeatureExtractor: Send + Sync {
    /// Extract the feature vector of the `size`-by-`size` region centered
    /// at `(x, y)`.
    fn extract(&self, x: i32, y: i32, size: i32) -> Option<DVector<f64>>;
}

/// Score every sample's region and store the result as its weight.
///
/// The weight is the classifier's hyperplane distance clamped at zero:
/// regions on the rejecting side of the hyperplane weigh nothing, so the
/// next resampling pass drops them, and weights stay non-negative as the
/// resampling contract requires.
pub fn weigh_samples(
    samples: &mut [Sample],
    extractor: &dyn FeatureExtractor,
    classifier: &RvmClassifier,
) {
    for sample in samples.iter_mut() {
        sample.weight = match extractor.extract(sample.x, sample.y, sample.size) {
            Some(feature_vector) => classifier
                .compute_hyperplane_distance(&feature_vector)
                .max(0.0),
            None => 0.0,
        };
    }
}
