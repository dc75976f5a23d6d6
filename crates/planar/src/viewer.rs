//! Displaying device arrays.

use std::{
    env, fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{bail, Context};
use image::ColorType;
use planar_array::{rgb_to_gray, Array};
use planar_mat::{DataType, Depth, Mat};

use crate::{convert, LayoutError};

/// Delay [`imshow`] passes to [`Viewer::wait_key`].
const SHOW_DELAY: Duration = Duration::from_millis(5);

/// A sink for images, like an OpenCV `highgui` window.
pub trait Viewer {
    /// Displays `image` under `name`, replacing any image previously shown under that name.
    fn show(&mut self, name: &str, image: &Mat) -> anyhow::Result<()>;

    /// Waits for up to `delay` for a key press and returns the key, if any.
    fn wait_key(&mut self, delay: Duration) -> Option<char>;
}

/// Shows a device array in `viewer`.
///
/// 3-channel arrays are treated as RGB and converted to grayscale, 1-channel arrays are shown as
/// they are. The array is converted with the default [`ConvertOptions`][crate::ConvertOptions],
/// so the viewer receives a `CV_32F` image. Afterwards, the viewer gets a few milliseconds to
/// process events.
pub fn imshow(name: &str, image: &Array<f32>, viewer: &mut impl Viewer) -> anyhow::Result<()> {
    let gray = match image.dims()[2] {
        1 => image.clone(),
        3 => rgb_to_gray(image).map_err(LayoutError::from)?,
        n => {
            return Err(LayoutError::new(format!(
                "cannot show array with {n} channels (expected 1 or 3)"
            ))
            .into())
        }
    };
    let mat = convert::to_host(&gray)?;
    viewer.show(name, &mat)?;
    viewer.wait_key(SHOW_DELAY);
    Ok(())
}

/// A [`Viewer`] that writes every image to a PNG file named after it.
///
/// Samples are mapped to 8 bits like `cv::imshow` does: 8-bit samples are written as they are,
/// 16- and 32-bit integers are divided by 256, and floating point samples are multiplied by 255
/// (so `[0, 1]` covers the full range). 3- and 4-channel images are interpreted as BGR and BGRA.
#[derive(Debug, Clone)]
pub struct PngDump {
    dir: PathBuf,
}

impl PngDump {
    /// Creates a viewer that writes to `dir`. The directory is created when the first image is
    /// shown.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a viewer that writes to `$PLANAR_DUMP_DIR`, or to a `planar` directory in the
    /// temporary directory if that variable is unset.
    pub fn from_env() -> Self {
        let dir = env::var_os("PLANAR_DUMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("planar"));
        Self::new(dir)
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file an image shown as `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl Viewer for PngDump {
    fn show(&mut self, name: &str, image: &Mat) -> anyhow::Result<()> {
        if image.is_empty() {
            bail!("cannot show empty image '{name}'");
        }
        let color = match image.channels() {
            1 => ColorType::L8,
            3 => ColorType::Rgb8,
            4 => ColorType::Rgba8,
            n => bail!("cannot write {n}-channel image '{name}' as PNG"),
        };

        let mut bytes = display_bytes(image);
        if image.channels() >= 3 {
            for pixel in bytes.chunks_exact_mut(image.channels()) {
                pixel.swap(0, 2);
            }
        }

        let path = self.path_for(name);
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create '{}'", self.dir.display()))?;
        image::save_buffer(
            &path,
            &bytes,
            u32::try_from(image.cols())?,
            u32::try_from(image.rows())?,
            color,
        )
        .with_context(|| format!("failed to write '{}'", path.display()))?;
        log::debug!("{name}: wrote {:?} to {}", image, path.display());
        Ok(())
    }

    fn wait_key(&mut self, delay: Duration) -> Option<char> {
        thread::sleep(delay);
        None
    }
}

/// Maps every sample of `image` to a `u8`.
fn display_bytes(image: &Mat) -> Vec<u8> {
    let scale = match image.depth() {
        Depth::U8 | Depth::S8 => 1.0,
        Depth::U16 | Depth::S16 | Depth::S32 => 1.0 / 256.0,
        Depth::F32 | Depth::F64 => 255.0,
    };
    image
        .to_vec::<f64>()
        .into_iter()
        .map(|v| u8::saturate_from_f64(v * scale))
        .collect()
}
