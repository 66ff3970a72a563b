//! Per-frame filtering step: resample, predict, validate, top up.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::resampling::ResamplingEnum;
use crate::sample::Sample;
use crate::transition::TransitionModelEnum;
use crate::{Error, Result};

/// Pixel bounds of the current frame.
///
/// This is all the sampler needs to know about the image; pixel data stays
/// with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBounds {
    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,
}

impl FrameBounds {
    /// Create new frame bounds.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter frame edge.
    pub fn shorter_edge(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Configuration for the resampling sampler.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Fixed population size maintained across frames.
    pub count: usize,

    /// Fraction of each generation replaced by fully-random fresh samples
    /// instead of resampled-and-predicted ones, in `[0, 1]`. Re-injects
    /// diversity to recover from track loss or abrupt appearance change.
    pub random_rate: f64,

    /// Smallest admissible region size, as a fraction of the shorter frame
    /// edge, in `(0, 1]`.
    pub min_size: f64,

    /// Largest admissible region size, as a fraction of the shorter frame
    /// edge, in `(0, 1]`. Must not be below `min_size`.
    pub max_size: f64,

    /// Resampling algorithm (enum-based static dispatch).
    pub resampling: ResamplingEnum,

    /// Transition model applied to every resampled sample.
    pub transition: TransitionModelEnum,

    /// Fixed seed for the sampler's random source. `None` seeds from OS
    /// entropy; set a value for reproducible runs.
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Create a configuration with default rates and strategies.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            random_rate: 0.35,
            min_size: 0.1,
            max_size: 0.8,
            resampling: ResamplingEnum::default(),
            transition: TransitionModelEnum::default(),
            seed: None,
        }
    }
}

/// Particle sampler maintaining a fixed-size population across frames.
///
/// One call to [`ResamplingSampler::sample`] is one complete filtering
/// step. The sampler owns a single random generator, seeded once at
/// construction; every draw of a step (resampling selection, transition
/// noise, fresh sizes and positions, in that order) comes from it, so a
/// fixed seed reproduces populations bit for bit.
pub struct ResamplingSampler {
    config: SamplerConfig,
    rng: StdRng,
}

impl ResamplingSampler {
    /// Create a new sampler with the given configuration.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        if config.count == 0 {
            return Err(Error::InvalidConfig("count must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&config.random_rate) {
            return Err(Error::InvalidConfig(format!(
                "random_rate must be within [0, 1], got {}",
                config.random_rate
            )));
        }
        if config.min_size <= 0.0 || config.max_size > 1.0 || config.min_size > config.max_size {
            return Err(Error::InvalidConfig(format!(
                "size fractions must satisfy 0 < min_size <= max_size <= 1, got {} and {}",
                config.min_size, config.max_size
            )));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// The configured population size.
    pub fn count(&self) -> usize {
        self.config.count
    }

    /// Produce the next generation of exactly `count` samples.
    ///
    /// `samples` is the previous population (any size, including empty),
    /// `offset` an external motion cue applied by the transition model, and
    /// `bounds` the current frame's pixel bounds.
    ///
    /// Resampled-and-predicted samples that fail the validity check are
    /// replaced in place by fresh random samples rather than dropped, so a
    /// single pass yields the full population.
    ///
    /// # Errors
    /// [`Error::DegenerateFrame`] when `bounds` leaves no admissible region
    /// at all (the frame is too small for the configured size fractions).
    /// The previous population is untouched by this outcome.
    pub fn sample(
        &mut self,
        samples: &[Sample],
        offset: [f64; 2],
        bounds: FrameBounds,
    ) -> Result<Vec<Sample>> {
        let (min_sz, max_sz) = self.size_range(bounds);
        if min_sz > max_sz {
            return Err(Error::DegenerateFrame {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let count = self.config.count;
        let keep = ((1.0 - self.config.random_rate) * count as f64) as usize;
        let mut new_samples = self.config.resampling.resample(samples, keep, &mut self.rng);

        for sample in &mut new_samples {
            self.config.transition.predict(sample, offset, &mut self.rng);
            if !region_is_valid(sample, min_sz, max_sz, bounds) {
                *sample = random_valid_sample(&mut self.rng, min_sz, max_sz, bounds);
            }
        }

        while new_samples.len() < count {
            new_samples.push(random_valid_sample(&mut self.rng, min_sz, max_sz, bounds));
        }
        Ok(new_samples)
    }

    /// Check a sample against the frame: admissible size and a region
    /// entirely inside the frame.
    pub fn is_valid(&self, sample: &Sample, bounds: FrameBounds) -> bool {
        let (min_sz, max_sz) = self.size_range(bounds);
        min_sz <= max_sz && region_is_valid(sample, min_sz, max_sz, bounds)
    }

    // Admissible size interval in pixels for the given frame. The lower end
    // is clamped to one pixel: a region cannot be empty.
    fn size_range(&self, bounds: FrameBounds) -> (i32, i32) {
        let shorter = bounds.shorter_edge() as f64;
        let min_sz = ((self.config.min_size * shorter) as i32).max(1);
        let max_sz = (self.config.max_size * shorter) as i32;
        (min_sz, max_sz)
    }
}

fn region_is_valid(sample: &Sample, min_sz: i32, max_sz: i32, bounds: FrameBounds) -> bool {
    let (x, y) = sample.top_left();
    sample.size >= min_sz
        && sample.size <= max_sz
        && x >= 0
        && x + sample.size <= bounds.width as i32
        && y >= 0
        && y + sample.size <= bounds.height as i32
}

// Fresh random sample, valid by construction: the size is drawn from the
// admissible interval first, then the center from the placements that keep
// the region inside the frame.
fn random_valid_sample(rng: &mut StdRng, min_sz: i32, max_sz: i32, bounds: FrameBounds) -> Sample {
    let size = rng.random_range(min_sz..=max_sz);
    let half = size / 2;
    let x = rng.random_range(0..=bounds.width as i32 - size) + half;
    let y = rng.random_range(0..=bounds.height as i32 - size) + half;
    Sample::new(x, y, size)
}
