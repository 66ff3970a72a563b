//! Transition models: the motion applied to a particle between frames.

use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

use crate::sample::Sample;

/// Trait for transition model implementations.
///
/// A transition model predicts a sample's state in the next frame by
/// mutating an independent copy. It never reads or writes any other
/// particle. Randomness comes from the caller-supplied generator so that a
/// sampler seeded once drives every draw of a filtering step.
pub trait TransitionModel: Send + Sync {
    /// Predict the next state of `sample`, biased by an external motion
    /// cue `offset` (e.g. an optical-flow estimate).
    fn predict(&self, sample: &mut Sample, offset: [f64; 2], rng: &mut dyn RngCore);
}

/// Gaussian transition model.
///
/// Position receives the motion offset plus zero-mean Gaussian noise whose
/// deviation scales with the sample size, so large candidate regions roam
/// proportionally further. Size is multiplied by `2^(scatter * N(0,1))`,
/// keeping it positive and log-symmetric around its previous value.
#[derive(Debug, Clone)]
pub struct GaussianTransitionModel {
    /// Noise magnitude relative to the sample size.
    pub scatter: f64,
}

impl GaussianTransitionModel {
    /// Create a new Gaussian transition model.
    pub fn new(scatter: f64) -> Self {
        Self { scatter }
    }
}

impl Default for GaussianTransitionModel {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl TransitionModel for GaussianTransitionModel {
    fn predict(&self, sample: &mut Sample, offset: [f64; 2], rng: &mut dyn RngCore) {
        let deviation = self.scatter * sample.size as f64;
        let noise_x: f64 = rng.sample(StandardNormal);
        let noise_y: f64 = rng.sample(StandardNormal);
        let noise_size: f64 = rng.sample(StandardNormal);

        sample.x = (sample.x as f64 + offset[0] + deviation * noise_x).round() as i32;
        sample.y = (sample.y as f64 + offset[1] + deviation * noise_y).round() as i32;
        sample.size = (sample.size as f64 * 2f64.powf(self.scatter * noise_size)).round() as i32;
    }
}

/// Drift-only transition model.
///
/// Applies the motion offset and nothing else. Useful as a baseline and in
/// tests where determinism matters.
#[derive(Debug, Clone, Default)]
pub struct DriftTransitionModel;

impl TransitionModel for DriftTransitionModel {
    fn predict(&self, sample: &mut Sample, offset: [f64; 2], _rng: &mut dyn RngCore) {
        sample.x = (sample.x as f64 + offset[0]).round() as i32;
        sample.y = (sample.y as f64 + offset[1]).round() as i32;
    }
}

/// Enum-based transition model for static dispatch.
#[derive(Debug, Clone)]
pub enum TransitionModelEnum {
    Gaussian(GaussianTransitionModel),
    Drift(DriftTransitionModel),
}

impl Default for TransitionModelEnum {
    fn default() -> Self {
        TransitionModelEnum::Gaussian(GaussianTransitionModel::default())
    }
}

impl TransitionModelEnum {
    #[inline(always)]
    pub fn predict(&self, sample: &mut Sample, offset: [f64; 2], rng: &mut dyn RngCore) {
        match self {
            TransitionModelEnum::Gaussian(m) => m.predict(sample, offset, rng),
            TransitionModelEnum::Drift(m) => m.predict(sample, offset, rng),
        }
    }
}

impl TransitionModel for TransitionModelEnum {
    #[inline(always)]
    fn predict(&self, sample: &mut Sample, offset: [f64; 2], rng: &mut dyn RngCore) {
        TransitionModelEnum::predict(self, sample, offset, rng)
    }
}
