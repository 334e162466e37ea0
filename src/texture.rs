//! Texture side of the pipeline: wraps a generated pixel buffer and writes it out
//!
//! Bytes are kept in generation order, so the image's rows are the field's
//! x coordinate and its columns the y coordinate.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::config::GeneratorSettings;
use crate::error::{Error, Result};
use crate::noise::{self, PixelBuffer, CHANNELS};

/// RGBA8 texture ready to be handed to a renderer or saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseTexture {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl NoiseTexture {
    /// Wrap raw RGBA8 bytes; the length must be exactly `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        let size = buffer.grid_size();
        Self { width: size, height: size, data: buffer.into_vec() }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let image = RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or(Error::BufferSize {
                expected: self.width as usize * self.height as usize * CHANNELS,
                actual: self.data.len(),
            })?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Image(e.to_string()))?;
        tracing::info!(path = %path.display(), width = self.width, height = self.height, "saved noise texture");
        Ok(())
    }
}

/// Result of a generation run with the seed that produced it
#[derive(Debug, Clone)]
pub struct GeneratedTexture {
    pub seed: i32,
    pub texture: NoiseTexture,
}

/// Resolve the seed and build the texture described by `settings`
pub fn generate_texture(settings: &GeneratorSettings) -> Result<GeneratedTexture> {
    let seed = settings.resolve_seed()?;
    let buffer = if settings.parallel {
        noise::generate_field_parallel(&settings.field, seed)?
    } else {
        noise::generate_field(&settings.field, seed)?
    };
    Ok(GeneratedTexture { seed, texture: NoiseTexture::from_buffer(buffer) })
}
