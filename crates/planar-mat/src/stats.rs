//! Summary statistics for debugging.

use std::fmt;

use itertools::{Itertools, MinMaxResult};
use ndarray::s;

use crate::Mat;

/// Number of rows and columns logged by [`mtop!`][crate::mtop].
const TOP_SIZE: usize = 3;

/// Minimum, maximum and mean over all samples of a [`Mat`], across channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl fmt::Display for MatStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min={} max={} mean={}", self.min, self.max, self.mean)
    }
}

impl Mat {
    /// Computes [`MatStats`] over all samples.
    ///
    /// Returns `None` if the matrix is empty. `NaN` samples propagate into `mean` and are ordered
    /// by [`f64::total_cmp`] for `min`/`max`.
    pub fn stats(&self) -> Option<MatStats> {
        let samples = self.to_array::<f64>();
        let (min, max) = match samples.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let mean = samples.mean()?;
        Some(MatStats { min, max, mean })
    }
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn log_stats(expr: &str, mat: &Mat) {
    match mat.stats() {
        Some(stats) => log::debug!(
            "{expr}: {}x{} {} {stats}",
            mat.rows(),
            mat.cols(),
            mat.mat_type(),
        ),
        None => log::debug!("{expr}: empty"),
    }
}

/// Formats the top-left corner of `mat`, one line per row and one `[c0, c1, ...]` group per pixel.
pub(crate) fn top_left_rows(mat: &Mat) -> Vec<String> {
    let samples = mat.to_array::<f64>();
    let corner = samples.slice(s![..TOP_SIZE.min(mat.rows()), ..TOP_SIZE.min(mat.cols()), ..]);
    corner
        .outer_iter()
        .map(|row| {
            row.outer_iter()
                .map(|pixel| format!("[{}]", pixel.iter().join(", ")))
                .join(" ")
        })
        .collect()
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn log_top(expr: &str, mat: &Mat) {
    if mat.is_empty() {
        log::debug!("{expr}: empty");
        return;
    }
    log::debug!(
        "{expr}: top-left of {}x{} {}",
        mat.rows(),
        mat.cols(),
        mat.mat_type(),
    );
    for line in top_left_rows(mat) {
        log::debug!("  {line}");
    }
}

/// Logs the size, type and [`MatStats`] of a [`Mat`] expression at *debug* level.
///
/// ```
/// # use planar_mat::{Mat, mstats};
/// let image = Mat::from_vec(1, 2, 1, vec![1.0f32, 3.0]);
/// mstats!(image); // logs "image: 1x2 CV_32FC1 min=1 max=3 mean=2"
/// ```
#[macro_export]
macro_rules! mstats {
    ($mat:expr) => {
        $crate::log_stats(stringify!($mat), &$mat)
    };
}

/// Logs the top-left samples of a [`Mat`] expression at *debug* level.
///
/// At most 3 rows and 3 columns are logged, with all channels of each pixel.
///
/// ```
/// # use planar_mat::{Mat, mtop};
/// let image = Mat::from_vec(2, 2, 2, vec![1u8, 2, 3, 4, 5, 6, 7, 8]);
/// mtop!(image); // logs "[1, 2] [3, 4]" and "[5, 6] [7, 8]"
/// ```
#[macro_export]
macro_rules! mtop {
    ($mat:expr) => {
        $crate::log_top(stringify!($mat), &$mat)
    };
}
