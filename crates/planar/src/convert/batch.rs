use planar_array::Array;
use planar_mat::Mat;

use crate::{host_to_device, LayoutError};

/// Converts a batch of images into a single device array with a trailing batch axis.
///
/// Every image must have 1 or 2 channels, and all images must convert to arrays of the same
/// dimensions. The batch axis is the first axis the converted images don't use: a batch of `n`
/// single-channel `rows x cols` images has dimensions `[rows, cols, n]`, a batch of two-channel
/// images has dimensions `[rows, cols, 2, n]` (both with `transpose`).
///
/// Index `i` along the batch axis holds [`host_to_device`]`(&images[i], transpose)`. An empty
/// slice produces an empty array.
pub fn batch_host_to_device(images: &[Mat], transpose: bool) -> Result<Array<f32>, LayoutError> {
    let Some(first) = images.first() else {
        log::trace!("batch_host_to_device: empty batch");
        return Ok(Array::empty());
    };

    for (i, image) in images.iter().enumerate() {
        if !matches!(image.channels(), 1 | 2) {
            return Err(LayoutError::new(format!(
                "batch image {i} has {} channels (only 1 or 2 are supported)",
                image.channels()
            )));
        }
        if !matches!(image.dims(), 1 | 2) {
            return Err(LayoutError::new(format!(
                "batch image {i} has {} dimensions (only 1 or 2 are supported)",
                image.dims()
            )));
        }
    }

    let head = host_to_device(first, transpose)?;
    let dims = head.dims();
    let axis = head.numdims();
    let mut out = Array::zeros(dims.with(axis, images.len()));
    log::trace!(
        "batch_host_to_device: {} images of {dims} -> {}",
        images.len(),
        out.dims(),
    );

    out.set_index(axis, 0, &head)?;
    for (i, image) in images.iter().enumerate().skip(1) {
        let converted = host_to_device(image, transpose)?;
        if converted.dims() != dims {
            return Err(LayoutError::new(format!(
                "batch image {i} converts to {}, but image 0 converts to {dims}",
                converted.dims()
            )));
        }
        out.set_index(axis, i, &converted)?;
    }
    Ok(out)
}
