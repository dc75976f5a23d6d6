use std::fmt;

/// Element type of an [`Array`][crate::Array].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
    /// 32-bit signed integer.
    S32,
    /// 8-bit unsigned integer.
    U8,
}

impl DType {
    /// Returns the size of one element, in bytes.
    pub fn size(self) -> usize {
        match self {
            DType::F32 | DType::S32 => 4,
            DType::F64 => 8,
            DType::U8 => 1,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::S32 => "s32",
            DType::U8 => "u8",
        })
    }
}

/// Types that can be stored in an [`Array`][crate::Array].
///
/// Conversions between element types go through `f64`, which represents every value of every
/// element type exactly.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    const DTYPE: DType;

    fn to_f64(self) -> f64;

    /// Converts from `f64` like a C cast: fractional parts are truncated towards zero. Values
    /// outside the range of an integer type saturate, `NaN` becomes 0.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_element {
    ($t:ty, $dtype:ident) => {
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    };
}

impl_element!(f32, F32);
impl_element!(f64, F64);
impl_element!(i32, S32);
impl_element!(u8, U8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casts() {
        assert_eq!(u8::from_f64(0.0), 0);
        assert_eq!(u8::from_f64(1.0), 1);
        assert_eq!(u8::from_f64(1.9), 1);
        assert_eq!(u8::from_f64(-4.0), 0);
        assert_eq!(u8::from_f64(1000.0), 255);
        assert_eq!(i32::from_f64(-2.7), -2);
        assert_eq!(i32::from_f64(f64::NAN), 0);
        assert_eq!(f32::from_f64(0.5), 0.5);
        assert_eq!(u8::DTYPE.size(), 1);
        assert_eq!(f64::DTYPE.to_string(), "f64");
    }
}
