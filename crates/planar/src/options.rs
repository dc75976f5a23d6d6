use planar_mat::Depth;

/// Parameters of the conversion functions in [`convert`][crate::convert].
///
/// The default transposes (so images keep their `rows x cols` orientation on the device) and
/// converts device arrays back to [`Depth::F32`] images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    transpose: bool,
    target: Depth,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self {
            transpose: true,
            target: Depth::F32,
        }
    }

    /// Sets whether the two spatial axes are swapped during conversion.
    pub fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    /// Sets the sample depth of images produced by [`to_host_with`][crate::convert::to_host_with].
    pub fn with_target(mut self, target: Depth) -> Self {
        self.target = target;
        self
    }

    #[inline]
    pub fn transpose(&self) -> bool {
        self.transpose
    }

    #[inline]
    pub fn target(&self) -> Depth {
        self.target
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}
