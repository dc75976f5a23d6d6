//! Host-side image matrices.
//!
//! [`Mat`] is a 2D image stored row-major with interleaved channels, the layout used by OpenCV's
//! `cv::Mat`. Samples can have any of the seven OpenCV [`Depth`]s, and a matrix has between 1 and
//! [`MAX_CHANNELS`] channels.
//!
//! The type of a matrix (depth plus channel count) is described by [`MatType`], which converts to
//! and from OpenCV type codes. [`type_name`] maps those codes to their OpenCV names.
//!
//! [`mstats!`] and [`mtop!`] log a matrix at *debug* level while debugging a pipeline.

mod depth;
mod mat;
mod stats;

#[cfg(test)]
mod tests;

pub use depth::{type_name, Depth, MatType, MAX_CHANNELS, UNKNOWN_TYPE};
pub use mat::{DataType, Mat, Samples};
pub use stats::{log_stats, log_top, MatStats};
