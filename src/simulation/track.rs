//! Raster track representation and border queries.
//!
//! The track is a 2D color raster whose only semantic property is whether a
//! pixel carries the border color. The [`Raster`] trait captures exactly that
//! query so car logic can run against synthetic rasters in tests.

/// Minimal border-test view of a track.
pub trait Raster {
    /// Returns `true` if the pixel at `(x, y)` is impassable border.
    ///
    /// Coordinates outside the raster are reported as border, so rays and
    /// corner checks never read out of bounds.
    fn is_border(&self, x: i32, y: i32) -> bool;
}

/// A raster track, immutable for the duration of an episode.
///
/// Holds a per-pixel border mask derived from RGBA image data by comparing
/// each pixel against the configured border color.
#[derive(Debug, Clone)]
pub struct Track {
    width: usize,
    height: usize,
    border: Vec<bool>,
}

impl Track {
    /// Builds a track from raw RGBA pixel data (4 bytes per pixel, row-major).
    ///
    /// Fails when the byte length does not match the given dimensions.
    pub fn from_rgba(
        width: usize,
        height: usize,
        rgba: &[u8],
        border_color: [u8; 4],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if rgba.len() != width * height * 4 {
            return Err(format!(
                "raster data is {} bytes, expected {} for {}x{}",
                rgba.len(),
                width * height * 4,
                width,
                height
            )
            .into());
        }

        let border = rgba
            .chunks_exact(4)
            .map(|pixel| pixel == border_color.as_slice())
            .collect();

        Ok(Self {
            width,
            height,
            border,
        })
    }

    /// Track width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Track height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Raster for Track {
    fn is_border(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return true;
        }
        self.border[y as usize * self.width + x as usize]
    }
}
