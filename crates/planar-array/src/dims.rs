//! Array dimensions and index sequences.

use std::{fmt, ops::Index};

/// The dimensions of an [`Array`][crate::Array].
///
/// Arrays always have 4 dimensions. Shapes with fewer dimensions are padded with trailing 1s, so
/// `Dim4::from([480, 640])` is `[480, 640, 1, 1]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dim4([usize; 4]);

impl Dim4 {
    #[inline]
    pub const fn new(dims: [usize; 4]) -> Self {
        Self(dims)
    }

    /// Returns the total number of elements described by these dimensions.
    #[inline]
    pub fn elements(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns the number of dimensions in use.
    ///
    /// This is the position of the last dimension whose size is not 1, plus one. Shapes without
    /// elements have 0 dimensions, single elements have 1.
    pub fn ndims(&self) -> usize {
        if self.elements() == 0 {
            return 0;
        }
        self.0.iter().rposition(|&d| d != 1).map_or(1, |i| i + 1)
    }

    /// Returns a copy of `self` with dimension `axis` set to `size`.
    #[track_caller]
    pub fn with(mut self, axis: usize, size: usize) -> Self {
        self.0[axis] = size;
        self
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 4] {
        self.0
    }
}

impl Index<usize> for Dim4 {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.0[index]
    }
}

macro_rules! impl_from_array {
    ($($n:literal),+) => {
        $(
            impl From<[usize; $n]> for Dim4 {
                fn from(dims: [usize; $n]) -> Self {
                    let mut out = [1; 4];
                    out[..$n].copy_from_slice(&dims);
                    Self(out)
                }
            }
        )+
    };
}

impl_from_array!(1, 2, 3, 4);

impl fmt::Display for Dim4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

impl fmt::Debug for Dim4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An inclusive, strided sequence of indices: `begin, begin + step, ...` up to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seq {
    begin: usize,
    end: usize,
    step: usize,
}

impl Seq {
    /// Creates a sequence from `begin` to `end` (inclusive) with the given `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is 0 or `end < begin`.
    #[track_caller]
    pub fn new(begin: usize, end: usize, step: usize) -> Self {
        assert!(step > 0, "sequence step must be positive");
        assert!(begin <= end, "invalid sequence {begin}..={end}");
        Self { begin, end, step }
    }

    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the number of indices in the sequence.
    pub fn len(&self) -> usize {
        (self.end - self.begin) / self.step + 1
    }

    /// Shifts the whole sequence towards 0 by `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is larger than `begin`.
    #[track_caller]
    pub fn shift_down(self, offset: usize) -> Self {
        assert!(
            offset <= self.begin,
            "cannot shift {:?} down by {}",
            self,
            offset
        );
        Self {
            begin: self.begin - offset,
            end: self.end - offset,
            step: self.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndims() {
        assert_eq!(Dim4::from([0]).ndims(), 0);
        assert_eq!(Dim4::from([3, 0, 2]).ndims(), 0);
        assert_eq!(Dim4::from([1]).ndims(), 1);
        assert_eq!(Dim4::from([5]).ndims(), 1);
        assert_eq!(Dim4::from([5, 4]).ndims(), 2);
        assert_eq!(Dim4::from([1, 4]).ndims(), 2);
        assert_eq!(Dim4::from([5, 4, 3]).ndims(), 3);
        assert_eq!(Dim4::from([5, 4, 1, 2]).ndims(), 4);
    }

    #[test]
    fn padding() {
        assert_eq!(Dim4::from([7]).as_array(), [7, 1, 1, 1]);
        assert_eq!(Dim4::from([7, 2, 3]).as_array(), [7, 2, 3, 1]);
        assert_eq!(Dim4::from([7, 2]).with(3, 9).as_array(), [7, 2, 1, 9]);
        assert_eq!(Dim4::from([7, 2]).to_string(), "[7, 2, 1, 1]");
    }

    #[test]
    fn seq() {
        let seq = Seq::new(2, 14, 3);
        assert_eq!(seq.len(), 5);
        let shifted = seq.shift_down(2);
        assert_eq!((shifted.begin(), shifted.end(), shifted.step()), (0, 12, 3));
        assert_eq!(shifted.len(), 5);

        assert_eq!(Seq::new(4, 4, 1).len(), 1);
        assert_eq!(Seq::new(0, 5, 3).len(), 2);
    }
}
