//! Kernel functions for the region classifier.
//!
//! This module provides:
//! - `Kernel` trait for all kernel implementations
//! - `PolynomialKernel` - polynomial similarity of two feature vectors
//! - `RbfKernel` - radial basis function (Gaussian) similarity
//! - `KernelEnum` - enum-based static dispatch over the closed variant set

mod dispatch;
mod polynomial;
mod rbf;
mod traits;

pub use dispatch::KernelEnum;
pub use polynomial::PolynomialKernel;
pub use rbf::RbfKernel;
pub use traits::Kernel;

use crate::{Error, Result};

/// Construct a kernel from an external loader's type tag.
///
/// Supported tags:
/// - `"polynomial"` with params `[scale, offset, degree]`
/// - `"rbf"` with params `[gamma]`
///
/// Unknown tags and wrong parameter counts are configuration errors; a
/// classifier must never come up with a silently substituted kernel.
pub fn try_kernel_by_name(name: &str, params: &[f64]) -> Result<KernelEnum> {
    match name {
        "polynomial" => {
            if params.len() != 3 {
                return Err(Error::InvalidConfig(format!(
                    "polynomial kernel expects 3 parameters (scale, offset, degree), got {}",
                    params.len()
                )));
            }
            Ok(KernelEnum::Polynomial(PolynomialKernel::new(
                params[0],
                params[1],
                params[2] as i32,
            )))
        }
        "rbf" => {
            if params.len() != 1 {
                return Err(Error::InvalidConfig(format!(
                    "rbf kernel expects 1 parameter (gamma), got {}",
                    params.len()
                )));
            }
            Ok(KernelEnum::Rbf(RbfKernel::new(params[0])))
        }
        _ => Err(Error::UnknownKernel(name.to_string())),
    }
}
