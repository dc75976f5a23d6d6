//! Layout conversion between host images and device arrays.
//!
//! Host images ([`Mat`]) are stored row-major with interleaved channels, the way OpenCV stores
//! them. Device arrays ([`Array`]) are stored column-major with one contiguous slab per channel,
//! the way ArrayFire stores them. This crate converts between the two:
//!
//! * [`host_to_device`] turns an image with 1 to 3 channels into an `f32` array of dimensions
//!   `[rows, cols, channels]`.
//! * [`batch_host_to_device`] stacks several 1- or 2-channel images along a trailing batch axis.
//! * [`device_to_host`] turns an array back into an image of a requested [`Depth`].
//! * [`imshow`] hands an array to a [`Viewer`], converting RGB to grayscale first.
//!
//! Channel order is reversed between the two representations, so OpenCV's BGR images end up as
//! RGB arrays on the device side.
//!
//! The [`convert`] module has variants of these functions that take their parameters from
//! [`ConvertOptions`].
//!
//! # Environment Variables
//!
//! * `PLANAR_DUMP_DIR`: Directory [`PngDump::from_env`] writes images to. Defaults to a `planar`
//!   directory in the system's temporary directory.
//! * `RUST_LOG`: Overrides the log filters set by [`init_logger!`].

use log::LevelFilter;

pub mod convert;
mod error;
mod options;
mod viewer;

pub use convert::{batch_host_to_device, device_to_host, host_to_device};
pub use error::LayoutError;
pub use options::ConvertOptions;
pub use viewer::{imshow, PngDump, Viewer};

pub use planar_array::{Array, DType, Dim4, Element};
pub use planar_mat::{mstats, mtop, type_name, Depth, Mat, MatType};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("planar_mat"), log_level)
        .filter(Some("planar_array"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and the `planar` crates log at *debug* level. `RUST_LOG` can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
