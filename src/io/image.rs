//! Pixel buffer capability, PNG decoding, and canvas export

use crate::io::error::{Result, StitchError};
use image::RgbaImage;
use std::path::Path;

/// Read access to a rectangular RGBA8 pixel region
///
/// Border detection, histogram building, and compositing are written
/// against this narrow capability, keeping the geometry core independent
/// of the concrete imaging library type.
pub trait PixelBuffer {
    /// Buffer width in pixels
    fn width(&self) -> u32;

    /// Buffer height in pixels
    fn height(&self) -> u32;

    /// RGBA components at (x, y)
    ///
    /// Out-of-bounds reads yield transparent black.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

/// Write access to a rectangular RGBA8 pixel region
pub trait PixelBufferMut: PixelBuffer {
    /// Overwrite the RGBA components at (x, y)
    ///
    /// Out-of-bounds writes are ignored, which gives region copies their
    /// clipping behavior at canvas edges.
    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel_checked(x, y).map_or([0, 0, 0, 0], |p| p.0)
    }
}

impl PixelBufferMut for RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            pixel.0 = rgba;
        }
    }
}

/// Copy a source buffer into a destination at the given offset
///
/// Every destination pixel in the overlapping region is fully overwritten;
/// there is no alpha blending. Source pixels falling outside the
/// destination are clipped.
pub fn blit(dst: &mut impl PixelBufferMut, src: &impl PixelBuffer, offset_x: u32, offset_y: u32) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            dst.set_pixel(offset_x + x, offset_y + y, src.pixel(x, y));
        }
    }
}

/// Decode PNG (or other supported) bytes into an RGBA8 buffer
///
/// # Errors
///
/// Returns the underlying decode error for corrupt or unsupported bytes;
/// the acquirer wraps it with the tile index.
pub fn decode_rgba(bytes: &[u8]) -> std::result::Result<RgbaImage, image::ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Save the assembled canvas as a PNG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be encoded and written.
pub fn export_canvas_as_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas.save(output_path).map_err(|e| StitchError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
