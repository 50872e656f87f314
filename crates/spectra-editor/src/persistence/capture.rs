//! Preview image capture

use std::io::Cursor;
use std::path::Path;

use spectra_core::CameraPose;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CaptureError {
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Encode failed: {0}")]
    Encode(String),
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}

/// RGBA8 pixels, row-major from the top-left
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Buffer of `width` x `height` pixels all set to `color`
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Encode a pixel buffer as PNG
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, CaptureError> {
    let image = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.as_bytes().to_vec())
        .ok_or_else(|| {
            CaptureError::Encode(format!(
                "{} pixels do not fill a {}x{} image",
                buffer.pixels.len(),
                buffer.width,
                buffer.height
            ))
        })?;

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| CaptureError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Produces the preview image stored next to each save.
///
/// Hosts implement [`CaptureSink::render`]; encoding and writing default to
/// PNG on the local filesystem.
pub trait CaptureSink {
    fn render(&mut self, camera: &CameraPose) -> Result<PixelBuffer, CaptureError>;

    fn encode(&mut self, buffer: &PixelBuffer) -> Result<Vec<u8>, CaptureError> {
        encode_png(buffer)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<(), CaptureError> {
        std::fs::write(path, bytes).map_err(|e| CaptureError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Render, encode and write in one go
    fn capture_to(&mut self, camera: &CameraPose, path: &Path) -> Result<(), CaptureError> {
        let buffer = self.render(camera)?;
        let bytes = self.encode(&buffer)?;
        self.write(path, &bytes)
    }
}

/// Renders a flat color, for headless hosts without a renderer
#[derive(Debug, Clone, Copy)]
pub struct SolidColorCapture {
    pub width: u32,
    pub height: u32,
    pub color: [u8; 4],
}

impl Default for SolidColorCapture {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            color: [0, 0, 0, 255],
        }
    }
}

impl CaptureSink for SolidColorCapture {
    fn render(&mut self, _camera: &CameraPose) -> Result<PixelBuffer, CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::Render("empty capture size".to_string()));
        }
        Ok(PixelBuffer::filled(self.width, self.height, self.color))
    }
}
