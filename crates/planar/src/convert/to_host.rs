use planar_array::{Array, DType, Element};
use planar_mat::{Depth, Mat, MatType, MAX_CHANNELS};

use crate::LayoutError;

use super::device_dtype;

/// Converts a device array back into an interleaved host image of depth `target`.
///
/// The channel count is taken from the array's third dimension. With `transpose`, an array of
/// dimensions `[rows, cols, channels]` produces a `rows x cols` image and device channel `k` is
/// stored as host channel `channels - 1 - k`, undoing [`host_to_device`][crate::host_to_device].
/// Without it, the image is `dims[1] x dims[0]` and receives the array's column-major elements
/// unchanged.
///
/// Elements are converted like C casts (see [`Element::from_f64`]). `target` must be one of
/// [`Depth::U8`], [`Depth::S32`], [`Depth::F32`] or [`Depth::F64`]. Batched arrays (with a
/// fourth dimension) and arrays with more than 4 channels are rejected.
pub fn device_to_host<T: Element>(
    input: &Array<T>,
    target: Depth,
    transpose: bool,
) -> Result<Mat, LayoutError> {
    let dtype = device_dtype(target)?;
    if input.is_empty() {
        log::trace!("device_to_host: empty input");
        return Ok(Mat::new(0, 0, MatType::new(target, 1)));
    }

    let dims = input.dims();
    let channels = dims[2];
    if dims[3] != 1 {
        return Err(LayoutError::new(format!(
            "cannot convert batched array {dims} to an image"
        )));
    }
    if channels > MAX_CHANNELS {
        return Err(LayoutError::new(format!(
            "cannot convert array with {channels} channels to an image (at most {MAX_CHANNELS})"
        )));
    }

    let (rows, cols) = if transpose {
        (dims[0], dims[1])
    } else {
        (dims[1], dims[0])
    };
    log::trace!("device_to_host: {dims} -> {rows}x{cols} {target}C{channels}");

    let interleaved = if !transpose {
        input.clone()
    } else if channels == 1 {
        input.t()
    } else {
        // Column-major `[channels, cols, rows]` is row-major interleaved.
        let mut out = Array::<T>::zeros([channels, cols, rows]);
        for k in 0..channels {
            let slab = input.index(2, k)?.t().moddims([1, cols, rows])?;
            out.set_index(0, channels - 1 - k, &slab)?;
        }
        out
    };

    Ok(match dtype {
        DType::U8 => Mat::from_vec(rows, cols, channels, interleaved.cast::<u8>().host()),
        DType::S32 => Mat::from_vec(rows, cols, channels, interleaved.cast::<i32>().host()),
        DType::F32 => Mat::from_vec(rows, cols, channels, interleaved.cast::<f32>().host()),
        DType::F64 => Mat::from_vec(rows, cols, channels, interleaved.cast::<f64>().host()),
    })
}
