use planar_array::{Array, Seq};
use planar_mat::Mat;

use crate::LayoutError;

/// Converts an interleaved host image into a planar `f32` device array.
///
/// Samples are converted to `f32`. Device channel `k` holds host channel `channels - 1 - k`, so a
/// BGR image becomes an RGB array.
///
/// With `transpose`, the result has dimensions `[rows, cols, channels]`, and element
/// `[r, c, k]` is the sample at row `r`, column `c`. Without it, single-channel images are
/// reinterpreted as `[rows, cols]` without reordering their row-major samples, and multi-channel
/// images produce `[cols, rows, channels]` arrays.
///
/// Empty images produce an empty array. Images with more than 3 channels are rejected.
pub fn host_to_device(input: &Mat, transpose: bool) -> Result<Array<f32>, LayoutError> {
    if input.is_empty() {
        log::trace!("host_to_device: empty input");
        return Ok(Array::empty());
    }

    let (h, w, c) = (input.rows(), input.cols(), input.channels());
    if c > 3 {
        return Err(LayoutError::new(format!(
            "cannot convert {c}-channel image to a device array (at most 3 channels are supported)"
        )));
    }

    if c == 1 {
        log::trace!("host_to_device: {h}x{w} single-channel image, transpose={transpose}");
        let samples = input.to_vec::<f32>();
        return Ok(if transpose {
            Array::from_vec([w, h], samples)?.t()
        } else {
            Array::from_vec([h, w], samples)?
        });
    }

    let dims = if transpose { [h, w, c] } else { [w, h, c] };
    let mut out = Array::zeros(dims);
    if w > 2 && h > 2 {
        log::trace!("host_to_device: {h}x{w}x{c} image, strided, transpose={transpose}");
        strided_slabs(input, transpose, &mut out)?;
    } else {
        log::trace!("host_to_device: {h}x{w}x{c} image, split, transpose={transpose}");
        split_slabs(input, transpose, &mut out)?;
    }
    Ok(out)
}

/// Reads each channel directly from the interleaved samples with a strided row selection.
pub(super) fn strided_slabs(
    input: &Mat,
    transpose: bool,
    out: &mut Array<f32>,
) -> Result<(), LayoutError> {
    let (h, w, c) = (input.rows(), input.cols(), input.channels());
    // Column `y` of this array is image row `y`, with all channels of a pixel adjacent.
    let interleaved = Array::from_vec([w * c, h], input.to_vec::<f32>())?;
    let last = Seq::new(c - 1, w * c - 1, c);
    for k in 0..c {
        let slab = interleaved.rows(last.shift_down(k))?;
        let slab = if transpose { slab.t() } else { slab };
        out.set_index(2, k, &slab)?;
    }
    Ok(())
}

/// Splits the image into single-channel planes and copies one plane per channel.
pub(super) fn split_slabs(
    input: &Mat,
    transpose: bool,
    out: &mut Array<f32>,
) -> Result<(), LayoutError> {
    let (h, w, c) = (input.rows(), input.cols(), input.channels());
    let planes = input.split();
    for k in 0..c {
        let slab = Array::from_vec([w, h], planes[c - 1 - k].to_vec::<f32>())?;
        let slab = if transpose { slab.t() } else { slab };
        out.set_index(2, k, &slab)?;
    }
    Ok(())
}
