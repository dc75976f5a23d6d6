//! Conversion between [`Mat`] images and [`Array`]s.
//!
//! The functions at the crate root take their parameters explicitly. The functions in this module
//! read them from [`ConvertOptions`] instead, or use the defaults.

mod batch;
mod to_device;
mod to_host;


use planar_array::{Array, DType, Element};
use planar_mat::{Depth, Mat};

use crate::{ConvertOptions, LayoutError};

pub use batch::batch_host_to_device;
pub use to_device::host_to_device;
pub use to_host::device_to_host;

/// Converts an image with the default [`ConvertOptions`].
pub fn to_device(input: &Mat) -> Result<Array<f32>, LayoutError> {
    to_device_with(input, &ConvertOptions::default())
}

pub fn to_device_with(input: &Mat, options: &ConvertOptions) -> Result<Array<f32>, LayoutError> {
    host_to_device(input, options.transpose())
}

/// Converts an array with the default [`ConvertOptions`], producing an `f32` image.
pub fn to_host<T: Element>(input: &Array<T>) -> Result<Mat, LayoutError> {
    to_host_with(input, &ConvertOptions::default())
}

pub fn to_host_with<T: Element>(
    input: &Array<T>,
    options: &ConvertOptions,
) -> Result<Mat, LayoutError> {
    device_to_host(input, options.target(), options.transpose())
}

/// Returns the array element type that stores samples of `depth`.
///
/// Only depths with a device counterpart are supported.
fn device_dtype(depth: Depth) -> Result<DType, LayoutError> {
    match depth {
        Depth::U8 => Ok(DType::U8),
        Depth::S32 => Ok(DType::S32),
        Depth::F32 => Ok(DType::F32),
        Depth::F64 => Ok(DType::F64),
        Depth::S8 | Depth::U16 | Depth::S16 => Err(LayoutError::new(format!(
            "unsupported target type {depth} (expected CV_8U, CV_32S, CV_32F or CV_64F)"
        ))),
    }
}
