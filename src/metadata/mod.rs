//! Audio file tag reading and writing.
//!
//! Uses the lofty crate for format-independent tag access. Only four slots
//! matter here: title, artist, album and the embedded front cover.
//!
//! Every write follows the same shape: read the file, change the primary
//! tag in memory, save once. The save is the single point of failure, so a
//! file is either fully updated or left untouched.

use lofty::config::WriteOptions;
use lofty::file::{TaggedFile, TaggedFileExt};
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt};
use std::path::Path;

use crate::error::{Error, Result};

/// Text tags used to build search queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

fn open(path: &Path) -> Result<TaggedFile> {
    Probe::open(path)
        .map_err(|e| Error::metadata(path, e))?
        .read()
        .map_err(|e| Error::metadata(path, e))
}

/// Get the primary tag for this format, inserting an empty one if missing
fn primary_tag_mut<'a>(path: &Path, tagged_file: &'a mut TaggedFile) -> Result<&'a mut Tag> {
    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| Error::metadata(path, "no writable tag for this format"))
}

fn save(path: &Path, tag: &Tag) -> Result<()> {
    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::metadata(path, e))
}

/// Read title, artist and album from the primary (or first) tag.
///
/// A file without any tag yields all-None values.
pub fn read(path: &Path) -> Result<TrackTags> {
    let tagged_file = open(path)?;

    let Some(tag) = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
    else {
        return Ok(TrackTags::default());
    };

    Ok(TrackTags {
        title: tag.title().map(|s| s.to_string()),
        artist: tag.artist().map(|s| s.to_string()),
        album: tag.album().map(|s| s.to_string()),
    })
}

/// Replace every embedded picture with a single JPEG front cover.
pub fn write_cover(path: &Path, jpeg: &[u8]) -> Result<()> {
    let mut tagged_file = open(path)?;
    let tag = primary_tag_mut(path, &mut tagged_file)?;

    while !tag.pictures().is_empty() {
        tag.remove_picture(0);
    }
    tag.push_picture(Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Jpeg),
        None,
        jpeg.to_vec(),
    ));

    save(path, tag)
}

/// Read the embedded front cover (or first picture) back
pub fn read_cover(path: &Path) -> Result<Option<Vec<u8>>> {
    let tagged_file = open(path)?;

    let Some(tag) = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
    else {
        return Ok(None);
    };

    let pictures = tag.pictures();
    Ok(pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .map(|p| p.data().to_vec()))
}

/// Clear the album tag, then set it to `album` when given.
pub fn set_album(path: &Path, album: Option<&str>) -> Result<()> {
    let mut tagged_file = open(path)?;
    let tag = primary_tag_mut(path, &mut tagged_file)?;

    tag.remove_album();
    if let Some(album) = album.filter(|a| !a.is_empty()) {
        tag.set_album(album.to_string());
    }

    save(path, tag)
}
