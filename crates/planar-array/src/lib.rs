//! Column-major device arrays.
//!
//! [`Array`] mirrors the array type of GPU array libraries like ArrayFire: it always has 4
//! dimensions ([`Dim4`], unused trailing dimensions have size 1) and stores its elements in
//! column-major order, so the first dimension is the fastest-varying one. Images are stored with
//! the two spatial dimensions first and the channel dimension third, which makes every channel a
//! contiguous 2D slab ("channel-planar" layout).
//!
//! Element types are restricted to the closed set described by [`DType`].

mod array;
mod color;
mod dims;
mod element;


pub use array::Array;
pub use color::{rgb_to_gray, RGB_TO_GRAY};
pub use dims::{Dim4, Seq};
pub use element::{DType, Element};
pub use ndarray::ShapeError;
