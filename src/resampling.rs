//! Resampling algorithms: weight-proportional redraw of a particle
//! population.

use rand::{Rng, RngCore};

use crate::sample::Sample;

/// Trait for resampling algorithm implementations.
///
/// A resampling algorithm draws `count` samples with replacement from a
/// weighted population, with selection probability proportional to each
/// sample's weight: a sample of weight `w` is expected to appear
/// `count * w / sum(w)` times. The input population is never mutated.
///
/// A population whose weights sum to zero is not an error; selection falls
/// back to uniform. An empty input population yields an empty output, since
/// there is nothing to draw from.
pub trait ResamplingAlgorithm: Send + Sync {
    /// Draw `count` samples from `samples`, proportional to weight.
    fn resample(&self, samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample>;
}

fn weight_sum(samples: &[Sample]) -> f64 {
    samples.iter().map(|s| s.weight).sum()
}

fn uniform_fallback(samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample> {
    (0..count)
        .map(|_| samples[rng.random_range(0..samples.len())])
        .collect()
}

/// Low-variance (systematic) resampling.
///
/// A single uniform draw positions `count` equally spaced pointers over the
/// cumulative weights, so the realized frequencies deviate from the
/// expected ones by less than one slot per sample.
#[derive(Debug, Clone, Default)]
pub struct LowVarianceSampling;

impl ResamplingAlgorithm for LowVarianceSampling {
    fn resample(&self, samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample> {
        if samples.is_empty() || count == 0 {
            return Vec::new();
        }

        let total = weight_sum(samples);
        if total <= 0.0 {
            return uniform_fallback(samples, count, rng);
        }

        let step = total / count as f64;
        let start = rng.random_range(0.0..step);

        let mut new_samples = Vec::with_capacity(count);
        let mut index = 0;
        let mut cumulative = samples[0].weight;
        for i in 0..count {
            let pointer = start + i as f64 * step;
            while cumulative < pointer && index + 1 < samples.len() {
                index += 1;
                cumulative += samples[index].weight;
            }
            new_samples.push(samples[index]);
        }
        new_samples
    }
}

/// Multinomial resampling.
///
/// Each of the `count` draws is an independent weighted pick. Higher
/// variance than [`LowVarianceSampling`], but each draw is unconditionally
/// independent of the others.
#[derive(Debug, Clone, Default)]
pub struct MultinomialSampling;

impl ResamplingAlgorithm for MultinomialSampling {
    fn resample(&self, samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample> {
        if samples.is_empty() || count == 0 {
            return Vec::new();
        }

        let total = weight_sum(samples);
        if total <= 0.0 {
            return uniform_fallback(samples, count, rng);
        }

        let mut new_samples = Vec::with_capacity(count);
        for _ in 0..count {
            let mut target = rng.random_range(0.0..total);
            let mut chosen = samples.len() - 1;
            for (i, sample) in samples.iter().enumerate() {
                if target < sample.weight {
                    chosen = i;
                    break;
                }
                target -= sample.weight;
            }
            new_samples.push(samples[chosen]);
        }
        new_samples
    }
}

/// Enum-based resampling algorithm for static dispatch.
#[derive(Debug, Clone)]
pub enum ResamplingEnum {
    LowVariance(LowVarianceSampling),
    Multinomial(MultinomialSampling),
}

impl Default for ResamplingEnum {
    fn default() -> Self {
        ResamplingEnum::LowVariance(LowVarianceSampling)
    }
}

impl ResamplingEnum {
    #[inline(always)]
    pub fn resample(&self, samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample> {
        match self {
            ResamplingEnum::LowVariance(a) => a.resample(samples, count, rng),
            ResamplingEnum::Multinomial(a) => a.resample(samples, count, rng),
        }
    }
}

impl ResamplingAlgorithm for ResamplingEnum {
    #[inline(always)]
    fn resample(&self, samples: &[Sample], count: usize, rng: &mut dyn RngCore) -> Vec<Sample> {
        ResamplingEnum::resample(self, samples, count, rng)
    }
}
