//! Sample depths, matrix type codes, and their display names.

use std::fmt;

/// Scalar type of the samples stored in a [`Mat`][crate::Mat].
///
/// The discriminants match OpenCV's `CV_8U` ... `CV_64F` depth constants, so they can be combined
/// into type codes with [`MatType::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    U8 = 0,
    S8 = 1,
    U16 = 2,
    S16 = 3,
    S32 = 4,
    F32 = 5,
    F64 = 6,
}

impl Depth {
    /// All depths, in type code order.
    pub const ALL: [Depth; 7] = [
        Depth::U8,
        Depth::S8,
        Depth::U16,
        Depth::S16,
        Depth::S32,
        Depth::F32,
        Depth::F64,
    ];

    /// Returns the depth belonging to an OpenCV depth constant.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(code).ok()?).copied()
    }

    /// Returns the size of one sample of this depth, in bytes.
    pub fn size(self) -> usize {
        match self {
            Depth::U8 | Depth::S8 => 1,
            Depth::U16 | Depth::S16 => 2,
            Depth::S32 | Depth::F32 => 4,
            Depth::F64 => 8,
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Depth::F32 | Depth::F64)
    }

    fn short_name(self) -> &'static str {
        match self {
            Depth::U8 => "8U",
            Depth::S8 => "8S",
            Depth::U16 => "16U",
            Depth::S16 => "16S",
            Depth::S32 => "32S",
            Depth::F32 => "32F",
            Depth::F64 => "64F",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CV_{}", self.short_name())
    }
}

/// Maximum number of interleaved channels a [`Mat`][crate::Mat] can have.
pub const MAX_CHANNELS: usize = 4;

/// Depth plus channel count of a [`Mat`][crate::Mat], eg. `CV_32FC3`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatType {
    depth: Depth,
    channels: usize,
}

impl MatType {
    /// Creates a [`MatType`] with `channels` interleaved channels.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is 0 or larger than [`MAX_CHANNELS`].
    #[track_caller]
    pub fn new(depth: Depth, channels: usize) -> Self {
        assert!(
            (1..=MAX_CHANNELS).contains(&channels),
            "invalid channel count {channels} (must be between 1 and {MAX_CHANNELS})"
        );
        Self { depth, channels }
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the OpenCV type code (`CV_MAKETYPE(depth, channels)`).
    pub fn code(&self) -> i32 {
        self.depth as i32 + (((self.channels - 1) as i32) << 3)
    }

    /// Decodes an OpenCV type code.
    ///
    /// Returns `None` for unknown depths and channel counts above [`MAX_CHANNELS`].
    pub fn from_code(code: i32) -> Option<Self> {
        if code < 0 {
            return None;
        }
        let depth = Depth::from_code(code & 7)?;
        let channels = (code >> 3) as usize + 1;
        if channels > MAX_CHANNELS {
            return None;
        }
        Some(Self { depth, channels })
    }
}

impl fmt::Display for MatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}C{}", self.depth, self.channels)
    }
}

impl fmt::Debug for MatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Returned by [`type_name`] for codes that are not in the table.
pub const UNKNOWN_TYPE: &str = "unknown image type";

// 7 depths, each without channel suffix and with C1 to C4. The unsuffixed name and the C1 name
// share a code; lookup returns the first entry.
const TYPE_NAMES: [(i32, &str); 35] = [
    (0, "CV_8U"),
    (0, "CV_8UC1"),
    (8, "CV_8UC2"),
    (16, "CV_8UC3"),
    (24, "CV_8UC4"),
    (1, "CV_8S"),
    (1, "CV_8SC1"),
    (9, "CV_8SC2"),
    (17, "CV_8SC3"),
    (25, "CV_8SC4"),
    (2, "CV_16U"),
    (2, "CV_16UC1"),
    (10, "CV_16UC2"),
    (18, "CV_16UC3"),
    (26, "CV_16UC4"),
    (3, "CV_16S"),
    (3, "CV_16SC1"),
    (11, "CV_16SC2"),
    (19, "CV_16SC3"),
    (27, "CV_16SC4"),
    (4, "CV_32S"),
    (4, "CV_32SC1"),
    (12, "CV_32SC2"),
    (20, "CV_32SC3"),
    (28, "CV_32SC4"),
    (5, "CV_32F"),
    (5, "CV_32FC1"),
    (13, "CV_32FC2"),
    (21, "CV_32FC3"),
    (29, "CV_32FC4"),
    (6, "CV_64F"),
    (6, "CV_64FC1"),
    (14, "CV_64FC2"),
    (22, "CV_64FC3"),
    (30, "CV_64FC4"),
];

/// Returns the OpenCV name of a matrix type code, eg. `"CV_32FC3"` for `21`.
///
/// Single-channel codes map to the unsuffixed name (`"CV_8U"`, not `"CV_8UC1"`). Codes that are
/// not in the table yield [`UNKNOWN_TYPE`].
pub fn type_name(code: i32) -> &'static str {
    TYPE_NAMES
        .iter()
        .find(|&&(c, _)| c == code)
        .map_or(UNKNOWN_TYPE, |&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(MatType::new(Depth::U8, 1).code(), 0);
        assert_eq!(MatType::new(Depth::U8, 3).code(), 16);
        assert_eq!(MatType::new(Depth::F32, 1).code(), 5);
        assert_eq!(MatType::new(Depth::F32, 3).code(), 21);
        assert_eq!(MatType::new(Depth::F64, 4).code(), 30);

        for depth in Depth::ALL {
            for channels in 1..=MAX_CHANNELS {
                let ty = MatType::new(depth, channels);
                assert_eq!(MatType::from_code(ty.code()), Some(ty));
            }
        }

        assert_eq!(MatType::from_code(7), None);
        assert_eq!(MatType::from_code(32), None);
        assert_eq!(MatType::from_code(-1), None);
    }

    #[test]
    fn names() {
        assert_eq!(type_name(0), "CV_8U");
        assert_eq!(type_name(8), "CV_8UC2");
        assert_eq!(type_name(21), "CV_32FC3");
        assert_eq!(type_name(30), "CV_64FC4");
        assert_eq!(type_name(7), UNKNOWN_TYPE);
        assert_eq!(type_name(-3), UNKNOWN_TYPE);
        assert_eq!(type_name(1000), UNKNOWN_TYPE);

        // Every depth/channel combination has a name, and it agrees with `Display`.
        for depth in Depth::ALL {
            assert_eq!(type_name(depth as i32), depth.to_string());
            for channels in 2..=MAX_CHANNELS {
                let ty = MatType::new(depth, channels);
                assert_eq!(type_name(ty.code()), ty.to_string());
            }
        }
    }

    #[test]
    #[should_panic(expected = "invalid channel count")]
    fn too_many_channels() {
        MatType::new(Depth::U8, 5);
    }
}
