use ndarray::{Axis, ErrorKind, ShapeError, Zip};

use crate::Array;

/// Luma weights for the red, green and blue channel (ITU-R BT.709).
pub const RGB_TO_GRAY: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Converts a 3-channel RGB image to a single-channel grayscale image.
///
/// The input must have dimensions `[h, w, 3, 1]`. The channels are weighted with
/// [`RGB_TO_GRAY`]; the result has dimensions `[h, w, 1, 1]`.
pub fn rgb_to_gray(image: &Array<f32>) -> Result<Array<f32>, ShapeError> {
    let dims = image.dims();
    if dims[2] != 3 || dims[3] != 1 {
        return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
    }

    let [wr, wg, wb] = RGB_TO_GRAY;
    let view = image.view().index_axis_move(Axis(3), 0);
    let gray = Zip::from(view.index_axis(Axis(2), 0))
        .and(view.index_axis(Axis(2), 1))
        .and(view.index_axis(Axis(2), 2))
        .map_collect(|&r, &g, &b| wr * r + wg * g + wb * b);

    log::trace!("rgb_to_gray: {} -> {:?}", dims, gray.shape());

    let gray = gray.insert_axis(Axis(2)).insert_axis(Axis(3));
    Ok(Array::from_view(gray.view()))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn weights() {
        // 1x2 image: one pure red pixel, one white pixel.
        let rgb = Array::from_vec([1, 2, 3], vec![1.0, 1.0, 0.0, 1.0, 0.0, 1.0]).unwrap();
        let gray = rgb_to_gray(&rgb).unwrap();
        assert_eq!(gray.dims().as_array(), [1, 2, 1, 1]);
        assert_relative_eq!(gray.get([0, 0, 0, 0]), 0.2126);
        assert_relative_eq!(gray.get([0, 1, 0, 0]), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn requires_three_channels() {
        assert!(rgb_to_gray(&Array::zeros([4, 4, 1])).is_err());
        assert!(rgb_to_gray(&Array::zeros([4, 4, 4])).is_err());
        assert!(rgb_to_gray(&Array::zeros([4, 4, 3, 2])).is_err());
    }
}
