//! Texture loading and data structures.
//! Only the uncompressed 24-bit BMP subset is decoded: a fixed 54-byte
//! header followed by tightly packed pixels, row padding not honored.

use std::{fs, path::Path};

use crate::error::{AssetError, AssetResult};

const BMP_WIDTH_OFFSET: usize = 18;
const BMP_HEIGHT_OFFSET: usize = 22;
const BMP_HEADER_SIZE: usize = 54;
const BMP_BYTES_PER_PIXEL: usize = 3;
/// Larger dimensions are treated as a corrupt header.
const MAX_DIMENSION: u32 = 16384;

/// Texture data in CPU-friendly format before GPU upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

/// Supported texture formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureFormat {
    Rgb8,
    Rgba8,
}

impl TextureData {
    pub fn new_rgb8(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 3) as usize);
        Self {
            data,
            width,
            height,
            format: TextureFormat::Rgb8,
        }
    }

    pub fn new_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            data,
            width,
            height,
            format: TextureFormat::Rgba8,
        }
    }

    /// Load a texture from a BMP file.
    pub fn load_bmp<P: AsRef<Path>>(path: P) -> AssetResult<Self> {
        let path = path.as_ref();
        log::info!("Loading texture from {:?}", path);

        let bytes = fs::read(path).map_err(|source| AssetError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let texture = Self::decode_bmp(&bytes).map_err(|reason| AssetError::TextureDecode {
            path: path.to_path_buf(),
            reason,
        })?;

        log::info!(
            "Loaded texture {}x{} with {} bytes",
            texture.width,
            texture.height,
            texture.data.len()
        );
        Ok(texture)
    }

    /// Decode BMP bytes into RGB8. BMP stores pixels as BGR.
    pub fn decode_bmp(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() < BMP_HEADER_SIZE {
            return Err(format!(
                "header needs {} bytes, file has {}",
                BMP_HEADER_SIZE,
                bytes.len()
            ));
        }
        let width = read_dimension(bytes, BMP_WIDTH_OFFSET, "width")?;
        let height = read_dimension(bytes, BMP_HEIGHT_OFFSET, "height")?;

        let len = width as usize * height as usize * BMP_BYTES_PER_PIXEL;
        let pixels = &bytes[BMP_HEADER_SIZE..];
        if pixels.len() < len {
            return Err(format!(
                "{}x{} needs {} pixel bytes, file has {}",
                width,
                height,
                len,
                pixels.len()
            ));
        }

        let data = pixels[..len]
            .chunks_exact(BMP_BYTES_PER_PIXEL)
            .flat_map(|bgr| [bgr[2], bgr[1], bgr[0]])
            .collect();
        Ok(Self::new_rgb8(width, height, data))
    }

    /// Placeholder checkerboard used when a texture cannot be loaded.
    pub fn checkerboard(size: u32) -> Self {
        let mut data = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let checker = ((x / 8) + (y / 8)) % 2;
                if checker == 0 {
                    data.extend_from_slice(&[255, 255, 255, 255]);
                } else {
                    data.extend_from_slice(&[128, 128, 128, 255]);
                }
            }
        }

        Self::new_rgba8(size, size, data)
    }

    /// Expand to RGBA8 with an opaque alpha channel.
    pub fn to_rgba8(&self) -> Self {
        match self.format {
            TextureFormat::Rgba8 => self.clone(),
            TextureFormat::Rgb8 => {
                let data = self
                    .data
                    .chunks_exact(3)
                    .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                    .collect();
                Self::new_rgba8(self.width, self.height, data)
            }
        }
    }

    /// Get the number of bytes per pixel for the format.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self.format {
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
        }
    }

    /// Check if the texture data is valid.
    pub fn is_valid(&self) -> bool {
        let expected_size = (self.width * self.height * self.bytes_per_pixel()) as usize;
        self.data.len() == expected_size && self.width > 0 && self.height > 0
    }
}

fn read_dimension(bytes: &[u8], offset: usize, what: &str) -> Result<u32, String> {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    let value = i32::from_le_bytes(raw);
    if value <= 0 || value as u32 > MAX_DIMENSION {
        return Err(format!("unsupported {what} {value}"));
    }
    Ok(value as u32)
}

/// Encode RGB8 pixels in the same narrow BMP layout the decoder reads.
#[cfg(test)]
pub(crate) fn encode_bmp(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; BMP_HEADER_SIZE];
    out[0] = b'B';
    out[1] = b'M';
    out[BMP_WIDTH_OFFSET..BMP_WIDTH_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
    out[BMP_HEIGHT_OFFSET..BMP_HEIGHT_OFFSET + 4].copy_from_slice(&height.to_le_bytes());
    out.extend(rgb.chunks_exact(3).flat_map(|p| [p[2], p[1], p[0]]));
    out
}
