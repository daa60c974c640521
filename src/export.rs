use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::warn;

use crate::crop::crop;
use crate::frame::{flip_rect_y, resolve, Frame, RawFrame};
use crate::plist::render_descriptor;
use crate::{Result, SliceError};

/// One sprite produced by [slice_sheet]: the resolved frame, its cropped
/// pixels, and the file the caller is expected to write them to.
#[derive(Debug)]
pub struct SlicedSprite {
    /// The resolved frame, pivot included.
    pub frame: Frame,
    /// The cropped pixels, independently owned.
    pub image: RgbaImage,
    /// Target path `<out_dir>/<name>.png`. Not written by this crate.
    pub path: PathBuf,
}

/// The result of [export_atlas]: the rendered descriptor and the two
/// files the caller is expected to produce beside each other.
#[derive(Debug)]
pub struct AtlasExport {
    /// The descriptor text, ready to write out.
    pub descriptor: String,
    /// Target path `<out_dir>/<base_name>.plist` for the descriptor.
    pub descriptor_path: PathBuf,
    /// Target path `<out_dir>/<base_name>.png`. The caller copies or
    /// re-encodes the full sheet image here; the descriptor refers to
    /// this file name.
    pub texture_path: PathBuf,
}

/// Slice mode: resolve every frame, crop its region out of `sheet`, and
/// compute its target path.
///
/// Frames keep their top-left-origin rectangles; no flipping happens in
/// this mode. An empty frame list yields an empty result. The first
/// invalid frame fails the call; sprites cropped before it are discarded
/// with it. Performs no IO.
pub fn slice_sheet(
    sheet: &RgbaImage,
    frames: &[RawFrame],
    out_dir: &Path,
) -> Result<Vec<SlicedSprite>> {
    warn_on_duplicates(frames);
    let mut sprites = Vec::with_capacity(frames.len());
    for raw in frames {
        let frame = resolve(raw)?;
        let image = crop(sheet, frame.rect)?;
        let path = out_dir.join(format!("{}.png", frame.name));
        sprites.push(SlicedSprite { frame, image, path });
    }
    Ok(sprites)
}

/// Atlas mode: resolve every frame, flip its rectangle to bottom-left
/// origin, and render the descriptor for the whole sheet.
///
/// `base_name` names both output files: the descriptor lands at
/// `<out_dir>/<base_name>.plist` and refers to a texture file
/// `<base_name>.png`, which the caller places at the returned
/// `texture_path`. The sheet's pixels are not needed here, only its
/// dimensions. Performs no IO.
pub fn export_atlas(
    base_name: &str,
    sheet_width: u32,
    sheet_height: u32,
    frames: &[RawFrame],
    out_dir: &Path,
) -> Result<AtlasExport> {
    warn_on_duplicates(frames);
    let mut resolved = Vec::with_capacity(frames.len());
    for raw in frames {
        let mut frame = resolve(raw)?;
        frame.rect = flip_rect_y(frame.rect, sheet_height);
        resolved.push(frame);
    }
    let texture_file_name = format!("{}.png", base_name);
    let descriptor = render_descriptor(&texture_file_name, sheet_width, sheet_height, &resolved);
    Ok(AtlasExport {
        descriptor,
        descriptor_path: out_dir.join(format!("{}.plist", base_name)),
        texture_path: out_dir.join(texture_file_name),
    })
}

/// Strict name check: fails with `DuplicateName` if two frames in the
/// batch share a name.
///
/// Neither export mode enforces this. Duplicate names make later output
/// files overwrite earlier ones once the caller writes them, so the
/// export functions only log a warning; callers that prefer to fail run
/// this check first.
pub fn check_unique_names(frames: &[RawFrame]) -> Result<()> {
    let mut seen = HashSet::new();
    for raw in frames {
        if !seen.insert(raw.name.as_str()) {
            return Err(SliceError::DuplicateName(format!(
                "Frame name '{}' appears more than once in this batch",
                raw.name
            )));
        }
    }
    Ok(())
}

fn warn_on_duplicates(frames: &[RawFrame]) {
    let mut seen = HashSet::new();
    for raw in frames {
        if !seen.insert(raw.name.as_str()) {
            warn!(
                "Duplicate frame name '{}'; its output will overwrite an earlier frame's",
                raw.name
            );
        }
    }
}
