//! Image normalization for embedding.
//!
//! Everything embedded ends up as an RGB JPEG no larger than
//! `max_size` on either edge.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};

use crate::config::Config;
use crate::error::Result;

/// Placeholder colour (dark grey)
const PLACEHOLDER_RGB: [u8; 3] = [50, 50, 50];

/// Decode, convert to RGB, shrink if oversized, and re-encode as JPEG.
///
/// Images already within bounds keep their dimensions.
pub fn normalize(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    let img = image::load_from_memory(data)?;

    let img = match img {
        DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    };

    let max = config.max_size.max(1);
    let img = if img.width() > max || img.height() > max {
        // resize() fits within the box and keeps the aspect ratio
        img.resize(max, max, FilterType::Lanczos3)
    } else {
        img
    };

    encode_jpeg(&img, config.jpeg_quality)
}

/// Flat grey square of `max_size` pixels, encoded like normalized output.
pub fn placeholder(config: &Config) -> Result<Vec<u8>> {
    let size = config.max_size.max(1);
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(size, size, Rgb(PLACEHOLDER_RGB)));
    encode_jpeg(&img, config.jpeg_quality)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    img.write_with_encoder(encoder)?;
    Ok(out)
}
