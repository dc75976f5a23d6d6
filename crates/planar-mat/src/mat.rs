use std::fmt;

use ndarray::{concatenate, Array3, ArrayView3, ArrayViewMut3, Axis};

use crate::depth::{type_name, Depth, MatType, MAX_CHANNELS};

/// Typed sample storage of a [`Mat`].
///
/// Every variant holds an array of shape `(rows, cols, channels)` in standard (row-major) layout,
/// so all channels of a pixel are next to each other in memory.
#[derive(Clone, PartialEq)]
pub enum Samples {
    U8(Array3<u8>),
    S8(Array3<i8>),
    U16(Array3<u16>),
    S16(Array3<i16>),
    S32(Array3<i32>),
    F32(Array3<f32>),
    F64(Array3<f64>),
}

/// Runs `$body` with `$a` bound to the typed sample array.
macro_rules! with_samples {
    ($samples:expr, $a:ident => $body:expr) => {
        match $samples {
            Samples::U8($a) => $body,
            Samples::S8($a) => $body,
            Samples::U16($a) => $body,
            Samples::S16($a) => $body,
            Samples::S32($a) => $body,
            Samples::F32($a) => $body,
            Samples::F64($a) => $body,
        }
    };
}

impl Samples {
    fn zeros(depth: Depth, shape: (usize, usize, usize)) -> Self {
        match depth {
            Depth::U8 => Samples::U8(Array3::zeros(shape)),
            Depth::S8 => Samples::S8(Array3::zeros(shape)),
            Depth::U16 => Samples::U16(Array3::zeros(shape)),
            Depth::S16 => Samples::S16(Array3::zeros(shape)),
            Depth::S32 => Samples::S32(Array3::zeros(shape)),
            Depth::F32 => Samples::F32(Array3::zeros(shape)),
            Depth::F64 => Samples::F64(Array3::zeros(shape)),
        }
    }

    /// Returns the [`Depth`] of the stored samples.
    pub fn depth(&self) -> Depth {
        match self {
            Samples::U8(_) => Depth::U8,
            Samples::S8(_) => Depth::S8,
            Samples::U16(_) => Depth::U16,
            Samples::S16(_) => Depth::S16,
            Samples::S32(_) => Depth::S32,
            Samples::F32(_) => Depth::F32,
            Samples::F64(_) => Depth::F64,
        }
    }

    /// Returns the `(rows, cols, channels)` shape of the stored array.
    pub fn dim(&self) -> (usize, usize, usize) {
        with_samples!(self, a => a.dim())
    }

    pub fn len(&self) -> usize {
        with_samples!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn convert<T: DataType>(&self) -> Array3<T> {
        with_samples!(self, a => a.mapv(|s| T::saturate_from_f64(s.to_f64())))
    }
}

/// Types that can be stored as [`Mat`] samples.
pub trait DataType: Copy + Default + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The [`Depth`] this type is stored as.
    const DEPTH: Depth;

    /// Widens the sample to `f64`. This is lossless for every sample type.
    fn to_f64(self) -> f64;

    /// Converts an `f64` to this type, rounding to the nearest integer and saturating at the
    /// type's bounds for integer types (`NaN` becomes 0).
    fn saturate_from_f64(v: f64) -> Self;

    fn array(samples: &Samples) -> Option<&Array3<Self>>;
    fn array_mut(samples: &mut Samples) -> Option<&mut Array3<Self>>;
    fn into_samples(array: Array3<Self>) -> Samples;
}

macro_rules! impl_data_type {
    ($variant:ident, $t:ty, $saturate:expr) => {
        impl DataType for $t {
            const DEPTH: Depth = Depth::$variant;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn saturate_from_f64(v: f64) -> Self {
                $saturate(v)
            }

            fn array(samples: &Samples) -> Option<&Array3<Self>> {
                match samples {
                    Samples::$variant(a) => Some(a),
                    _ => None,
                }
            }

            fn array_mut(samples: &mut Samples) -> Option<&mut Array3<Self>> {
                match samples {
                    Samples::$variant(a) => Some(a),
                    _ => None,
                }
            }

            fn into_samples(array: Array3<Self>) -> Samples {
                Samples::$variant(array)
            }
        }
    };
}

// `as` casts from floats saturate and map NaN to 0.
impl_data_type!(U8, u8, |v: f64| v.round() as u8);
impl_data_type!(S8, i8, |v: f64| v.round() as i8);
impl_data_type!(U16, u16, |v: f64| v.round() as u16);
impl_data_type!(S16, i16, |v: f64| v.round() as i16);
impl_data_type!(S32, i32, |v: f64| v.round() as i32);
impl_data_type!(F32, f32, |v: f64| v as f32);
impl_data_type!(F64, f64, |v: f64| v);

/// A 2D image matrix with up to [`MAX_CHANNELS`] interleaved channels.
///
/// Samples are stored row by row without padding; the samples of one pixel are adjacent
/// (`c0 c1 c2 c0 c1 c2 ...` for a 3-channel image). This is the memory layout of a continuous
/// OpenCV `cv::Mat`. [`Mat::view`] exposes the samples as an array indexed `[row, col, channel]`.
///
/// A [`Mat`] with no pixels is *empty*. The default value is an empty single-channel `CV_8U`
/// matrix.
#[derive(Clone, PartialEq)]
pub struct Mat {
    samples: Samples,
}

impl Mat {
    /// Creates an empty matrix.
    pub fn empty() -> Self {
        Self {
            samples: Samples::U8(Array3::zeros((0, 0, 1))),
        }
    }

    /// Creates a zero-filled matrix of the given size and type.
    pub fn new(rows: usize, cols: usize, ty: MatType) -> Self {
        Self {
            samples: Samples::zeros(ty.depth(), (rows, cols, ty.channels())),
        }
    }

    /// Creates a matrix that takes ownership of interleaved, row-major sample data.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is not between 1 and [`MAX_CHANNELS`], or if `data` does not hold
    /// exactly `rows * cols * channels` samples.
    #[track_caller]
    pub fn from_vec<T: DataType>(rows: usize, cols: usize, channels: usize, data: Vec<T>) -> Self {
        let len = data.len();
        match Array3::from_shape_vec((rows, cols, channels), data) {
            Ok(array) => Self::from_array(array),
            Err(_) => panic!(
                "incorrect sample count {} for {}x{} matrix with {} channels (expected {})",
                len,
                rows,
                cols,
                channels,
                rows * cols * channels,
            ),
        }
    }

    /// Creates a matrix from an array indexed `[row, col, channel]`.
    ///
    /// # Panics
    ///
    /// Panics if the channel axis does not have between 1 and [`MAX_CHANNELS`] entries.
    #[track_caller]
    pub fn from_array<T: DataType>(array: Array3<T>) -> Self {
        Self::from_samples(T::into_samples(array))
    }

    /// Creates a matrix from already typed [`Samples`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Mat::from_array`].
    #[track_caller]
    pub fn from_samples(samples: Samples) -> Self {
        let (_, _, channels) = samples.dim();
        assert!(
            (1..=MAX_CHANNELS).contains(&channels),
            "invalid channel count {channels} (must be between 1 and {MAX_CHANNELS})"
        );
        let samples = with_samples!(samples, a => {
            if a.is_standard_layout() {
                DataType::into_samples(a)
            } else {
                DataType::into_samples(a.as_standard_layout().into_owned())
            }
        });
        Self { samples }
    }

    /// Returns the number of rows (the image height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.samples.dim().0
    }

    /// Returns the number of columns (the image width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.samples.dim().1
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.dim().2
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.samples.depth()
    }

    pub fn mat_type(&self) -> MatType {
        MatType::new(self.depth(), self.channels())
    }

    /// Returns the OpenCV type code of this matrix (eg. `21` for `CV_32FC3`).
    pub fn type_code(&self) -> i32 {
        self.mat_type().code()
    }

    /// Returns the OpenCV name of this matrix's type, see [`type_name`].
    pub fn type_name(&self) -> &'static str {
        type_name(self.type_code())
    }

    /// Returns the matrix dimensionality: 0 for empty matrices, 2 otherwise.
    pub fn dims(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            2
        }
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn total(&self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    #[inline]
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn into_samples(self) -> Samples {
        self.samples
    }

    /// Returns the samples as an array view indexed `[row, col, channel]`, or `None` if `T` is
    /// not the matrix depth.
    pub fn view<T: DataType>(&self) -> Option<ArrayView3<'_, T>> {
        T::array(&self.samples).map(|a| a.view())
    }

    pub fn view_mut<T: DataType>(&mut self) -> Option<ArrayViewMut3<'_, T>> {
        T::array_mut(&mut self.samples).map(|a| a.view_mut())
    }

    /// Returns the interleaved samples as a slice of `T`, or `None` if `T` is not the matrix
    /// depth.
    pub fn data<T: DataType>(&self) -> Option<&[T]> {
        T::array(&self.samples).and_then(|a| a.as_slice())
    }

    /// Returns the samples as a mutable slice of `T`, or `None` if `T` is not the matrix depth.
    pub fn data_mut<T: DataType>(&mut self) -> Option<&mut [T]> {
        T::array_mut(&mut self.samples).and_then(|a| a.as_slice_mut())
    }

    /// Returns a single sample.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds or `T` is not the matrix depth.
    #[track_caller]
    pub fn at<T: DataType>(&self, row: usize, col: usize, channel: usize) -> T {
        let view = match self.view::<T>() {
            Some(view) => view,
            None => panic!("attempted to read {:?} as {}", self, T::DEPTH),
        };
        match view.get((row, col, channel)) {
            Some(&sample) => sample,
            None => panic!(
                "sample ({row}, {col}, {channel}) out of bounds for {:?}",
                self
            ),
        }
    }

    /// Returns a copy of all samples converted to `T` (see [`DataType::saturate_from_f64`]),
    /// indexed `[row, col, channel]`.
    pub fn to_array<T: DataType>(&self) -> Array3<T> {
        self.samples.convert()
    }

    /// Returns a copy of all samples converted to `T`, in interleaved row-major order.
    pub fn to_vec<T: DataType>(&self) -> Vec<T> {
        self.to_array::<T>().iter().copied().collect()
    }

    /// Converts the matrix to another depth, keeping size and channel count.
    ///
    /// Integer targets round to nearest and saturate.
    pub fn convert_to(&self, depth: Depth) -> Mat {
        if depth == self.depth() {
            return self.clone();
        }
        let samples = match depth {
            Depth::U8 => Samples::U8(self.to_array()),
            Depth::S8 => Samples::S8(self.to_array()),
            Depth::U16 => Samples::U16(self.to_array()),
            Depth::S16 => Samples::S16(self.to_array()),
            Depth::S32 => Samples::S32(self.to_array()),
            Depth::F32 => Samples::F32(self.to_array()),
            Depth::F64 => Samples::F64(self.to_array()),
        };
        Self { samples }
    }

    /// Splits the matrix into one single-channel matrix per channel.
    pub fn split(&self) -> Vec<Mat> {
        with_samples!(&self.samples, a => {
            a.axis_iter(Axis(2))
                .map(|plane| Mat::from_array(plane.insert_axis(Axis(2)).to_owned()))
                .collect()
        })
    }

    /// Interleaves single-channel matrices into one multi-channel matrix.
    ///
    /// # Panics
    ///
    /// Panics if `planes` is empty or has more than [`MAX_CHANNELS`] entries, or if the planes
    /// are not all single-channel matrices of the same size and depth.
    #[track_caller]
    pub fn merge(planes: &[Mat]) -> Mat {
        fn stack<T: DataType>(planes: &[Mat]) -> Mat {
            let views = planes
                .iter()
                .filter_map(|plane| plane.view::<T>())
                .collect::<Vec<_>>();
            match concatenate(Axis(2), &views) {
                Ok(array) => Mat::from_array(array),
                Err(e) => panic!("cannot merge {} planes: {e}", planes.len()),
            }
        }

        assert!(
            (1..=MAX_CHANNELS).contains(&planes.len()),
            "cannot merge {} planes",
            planes.len()
        );
        let first = &planes[0];
        for plane in planes {
            assert!(
                plane.channels() == 1
                    && plane.rows() == first.rows()
                    && plane.cols() == first.cols()
                    && plane.depth() == first.depth(),
                "cannot merge {:?} with {:?}",
                plane,
                first,
            );
        }

        match first.depth() {
            Depth::U8 => stack::<u8>(planes),
            Depth::S8 => stack::<i8>(planes),
            Depth::U16 => stack::<u16>(planes),
            Depth::S16 => stack::<i16>(planes),
            Depth::S32 => stack::<i32>(planes),
            Depth::F32 => stack::<f32>(planes),
            Depth::F64 => stack::<f64>(planes),
        }
    }
}

impl Default for Mat {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Mat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mat")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("type", &self.mat_type())
            .finish()
    }
}
