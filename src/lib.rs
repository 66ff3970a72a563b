//! # Condensation - Particle-Filter Tracking Core
//!
//! Sequential Monte Carlo state estimation for visual object tracking.
//!
//! The crate keeps a fixed-size population of candidate tracked regions
//! ([`Sample`]s: square patches with a position and an edge length) alive
//! across video frames. One call to [`ResamplingSampler::sample`] performs a
//! complete filtering step: weight-proportional resampling of the previous
//! generation, stochastic prediction through a transition model, geometric
//! validation against the frame, and top-up with fresh random hypotheses.
//!
//! Candidate regions are scored by an [`RvmClassifier`], a kernel-machine
//! classifier that computes a signed hyperplane distance from a weighted sum
//! of kernel evaluations against a learned set of support vectors.
//!
//! Pixels never enter this crate. The caller provides frame bounds and a
//! [`FeatureExtractor`] that maps a region to its feature vector.
//!
//! ## Example
//!
//! ```rust
//! use condensation_rs::{FrameBounds, ResamplingSampler, SamplerConfig};
//!
//! let mut config = SamplerConfig::new(100);
//! config.seed = Some(7);
//! let mut sampler = ResamplingSampler::new(config).unwrap();
//!
//! // Empty previous population: the whole generation is drawn fresh.
//! let population = sampler
//!     .sample(&[], [0.0, 0.0], FrameBounds::new(640, 480))
//!     .unwrap();
//! assert_eq!(population.len(), 100);
//! ```

pub mod classifier;
pub mod kernel;
pub mod measurement;
pub mod resampling;
pub mod sample;
pub mod sampler;
pub mod transition;

// Re-exports for convenience
pub use classifier::{ClassifierBundle, RvmClassifier};
pub use kernel::{Kernel, KernelEnum, PolynomialKernel, RbfKernel};
pub use measurement::{weigh_samples, FeatureExtractor};
pub use resampling::{LowVarianceSampling, MultinomialSampling, ResamplingAlgorithm, ResamplingEnum};
pub use sample::Sample;
pub use sampler::{FrameBounds, ResamplingSampler, SamplerConfig};
pub use transition::{DriftTransitionModel, GaussianTransitionModel, TransitionModel, TransitionModelEnum};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the condensation core
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Invalid classifier parameters: {0}")]
        InvalidClassifier(String),

        #[error("Unknown kernel type: {0}")]
        UnknownKernel(String),

        #[error("Frame of {width}x{height} admits no valid sample placement")]
        DegenerateFrame { width: u32, height: u32 },
    }

    /// Result type for condensation operations
    pub type Result<T> = std::result::Result<T, Error>;
}
