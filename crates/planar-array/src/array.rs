use std::fmt;

use ndarray::{Array4, ArrayView4, Axis, ErrorKind, ShapeBuilder, ShapeError, Slice};

use crate::{DType, Dim4, Element, Seq};

/// A 4-dimensional, column-major array.
///
/// Element `[i0, i1, i2, i3]` lives at linear position `i0 + d0 * (i1 + d1 * (i2 + d2 * i3))`,
/// where `d*` are the array's [`Dim4`]. [`Array::host`] returns the elements in that order, and
/// [`Array::from_vec`] expects them in that order.
#[derive(Clone, PartialEq)]
pub struct Array<T: Element> {
    data: Array4<T>,
}

impl<T: Element> Array<T> {
    /// Creates an array from column-major `data`.
    ///
    /// Fails with a [`ShapeError`] when the length of `data` doesn't match `dims`.
    pub fn from_vec(dims: impl Into<Dim4>, data: Vec<T>) -> Result<Self, ShapeError> {
        let dims = dims.into();
        Ok(Self {
            data: Array4::from_shape_vec(dims.as_array().f(), data)?,
        })
    }

    /// Creates an array by copying column-major `data`.
    pub fn from_slice(dims: impl Into<Dim4>, data: &[T]) -> Result<Self, ShapeError> {
        Self::from_vec(dims, data.to_vec())
    }

    /// Creates an array with every element set to `value`.
    pub fn constant(value: T, dims: impl Into<Dim4>) -> Self {
        Self {
            data: Array4::from_elem(dims.into().as_array().f(), value),
        }
    }

    pub fn zeros(dims: impl Into<Dim4>) -> Self {
        Self::constant(T::default(), dims)
    }

    /// Creates an array without elements.
    pub fn empty() -> Self {
        Self::zeros([0])
    }

    /// Copies an `ndarray` view into a new (column-major) array.
    pub fn from_view(view: ArrayView4<'_, T>) -> Self {
        let mut data = Array4::from_elem(view.raw_dim().f(), T::default());
        data.assign(&view);
        Self { data }
    }

    /// Returns an `ndarray` view of the elements, indexed by `[i0, i1, i2, i3]`.
    #[inline]
    pub fn view(&self) -> ArrayView4<'_, T> {
        self.data.view()
    }

    pub fn dims(&self) -> Dim4 {
        let shape = self.data.shape();
        Dim4::new([shape[0], shape[1], shape[2], shape[3]])
    }

    /// Returns the number of dimensions in use (see [`Dim4::ndims`]).
    pub fn numdims(&self) -> usize {
        self.dims().ndims()
    }

    #[inline]
    pub fn elements(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: [usize; 4]) -> T {
        self.data[index]
    }

    /// Copies the elements to a `Vec`, in column-major order.
    pub fn host(&self) -> Vec<T> {
        // Iterating the axis-reversed view visits the first axis fastest.
        self.data.t().iter().copied().collect()
    }

    /// Swaps the first two dimensions.
    pub fn t(&self) -> Self {
        Self::from_view(self.data.view().permuted_axes([1, 0, 2, 3]))
    }

    /// Reinterprets the elements with different dimensions, keeping their column-major order.
    ///
    /// Fails if `dims` has a different number of elements.
    pub fn moddims(&self, dims: impl Into<Dim4>) -> Result<Self, ShapeError> {
        Self::from_vec(dims, self.host())
    }

    /// Selects the rows (indices along the first dimension) in `seq`.
    pub fn rows(&self, seq: Seq) -> Result<Self, ShapeError> {
        if seq.end() >= self.dims()[0] {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        let slice = Slice::new(
            seq.begin() as isize,
            Some(seq.end() as isize + 1),
            seq.step() as isize,
        );
        Ok(Self::from_view(self.data.slice_axis(Axis(0), slice)))
    }

    /// Selects index `index` of dimension `axis`. The result has size 1 in that dimension.
    pub fn index(&self, axis: usize, index: usize) -> Result<Self, ShapeError> {
        self.check_index(axis, index)?;
        let view = self.data.index_axis(Axis(axis), index);
        Ok(Self::from_view(view.insert_axis(Axis(axis))))
    }

    /// Overwrites index `index` of dimension `axis` with the contents of `src`.
    ///
    /// `src` must have the dimensions of [`Array::index`]`(axis, index)`.
    pub fn set_index(&mut self, axis: usize, index: usize, src: &Self) -> Result<(), ShapeError> {
        self.check_index(axis, index)?;
        if src.dims() != self.dims().with(axis, 1) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        self.data
            .index_axis_mut(Axis(axis), index)
            .assign(&src.data.index_axis(Axis(axis), 0));
        Ok(())
    }

    fn check_index(&self, axis: usize, index: usize) -> Result<(), ShapeError> {
        if axis >= 4 || index >= self.data.len_of(Axis(axis)) {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        Ok(())
    }

    /// Converts every element to `U`, using [`Element::from_f64`] semantics.
    pub fn cast<U: Element>(&self) -> Array<U> {
        Array::from_view(self.data.mapv(|v| U::from_f64(v.to_f64())).view())
    }
}

impl<T: Element> Default for Array<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array<{}>{}", T::DTYPE, self.dims())
    }
}
