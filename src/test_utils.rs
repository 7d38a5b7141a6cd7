//! Test utilities and fixtures.
//!
//! Real M4A files are awkward to synthesize, so tag tests run against tiny
//! PCM WAV files, which lofty tags through ID3v2 the same way.
//!
//! # Example
//!
//! ```ignore
//! let dir = tempfile::tempdir().unwrap();
//! let song = tagged_wav(dir.path(), "song.wav", Some("Title"), None, None);
//! let cover = jpeg_fixture(800, 600);
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt};

use crate::config::Config;

/// Write 0.1s of 8kHz mono 16-bit silence as a RIFF/WAVE file.
pub fn write_silent_wav(path: &Path) {
    const SAMPLE_RATE: u32 = 8000;
    let data_len: u32 = SAMPLE_RATE / 10 * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    std::fs::write(path, bytes).expect("Failed to write WAV fixture");
}

/// Create a WAV file in `dir` carrying the given text tags.
pub fn tagged_wav(
    dir: &Path,
    name: &str,
    title: Option<&str>,
    artist: Option<&str>,
    album: Option<&str>,
) -> PathBuf {
    let path = dir.join(name);
    write_silent_wav(&path);

    if title.is_none() && artist.is_none() && album.is_none() {
        return path;
    }

    let tagged_file = Probe::open(&path)
        .expect("Failed to probe WAV fixture")
        .read()
        .expect("Failed to read WAV fixture");
    let mut tag = Tag::new(tagged_file.primary_tag_type());
    if let Some(title) = title {
        tag.set_title(title.to_string());
    }
    if let Some(artist) = artist {
        tag.set_artist(artist.to_string());
    }
    if let Some(album) = album {
        tag.set_album(album.to_string());
    }
    tag.save_to_path(&path, WriteOptions::default())
        .expect("Failed to tag WAV fixture");

    path
}

/// Encode a two-tone RGB image of the given size as JPEG.
pub fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    encode_fixture(width, height, ImageFormat::Jpeg)
}

/// Encode a two-tone RGB image of the given size as PNG.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    encode_fixture(width, height, ImageFormat::Png)
}

fn encode_fixture(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([200, 30, 30])
        } else {
            Rgb([30, 30, 200])
        }
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format)
        .expect("Failed to encode image fixture");
    out.into_inner()
}

/// Config matching `.wav` fixtures with no pacing delay.
pub fn wav_config() -> Config {
    Config {
        request_delay: std::time::Duration::ZERO,
        ..Config::default()
    }
    .with_extensions(["wav"])
}
