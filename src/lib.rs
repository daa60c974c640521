#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Utilities for slicing sprite sheets. Given a decoded sheet image and a list
of named frame rectangles (with pivot/alignment metadata), this library
crops each frame into an independently owned image and/or renders a
[cocos2d](https://www.cocos2d-x.org/)-style `.plist` atlas descriptor for
the whole sheet. You can use it to build asset pipelines that turn
editor-sliced sheets into per-sprite files or engine-ready atlases.

The crate is a pure transformation library. The caller decodes the sheet
(for example with the [image](https://docs.rs/image) crate), supplies the
frame list, and receives pixel buffers and descriptor text together with
the file paths they are meant to land at. PNG encoding and all file-system
writes stay on the caller's side.

# Basic Usage

## Slice a sheet into sprites

```
use spritecut::{slice_sheet, Alignment, RawFrame, Rect};
use image::RgbaImage;
use std::path::Path;

let sheet = RgbaImage::new(64, 32);
let frames = vec![RawFrame {
    name: "idle_0".to_owned(),
    rect: Rect::new(0.0, 0.0, 16.0, 16.0),
    alignment: Alignment::Center,
}];

let sprites = slice_sheet(&sheet, &frames, Path::new("out")).unwrap();
for sprite in &sprites {
    // sprite.image holds the cropped pixels; writing it to sprite.path
    // (here "out/idle_0.png") is up to you, e.g. via RgbaImage::save.
    assert_eq!(sprite.image.dimensions(), (16, 16));
}
```

## Render an atlas descriptor

```
use spritecut::{export_atlas, Alignment, RawFrame, Rect};
use std::path::Path;

let frames = vec![RawFrame {
    name: "idle_0".to_owned(),
    rect: Rect::new(0.0, 0.0, 16.0, 16.0),
    alignment: Alignment::BottomLeft,
}];

let atlas = export_atlas("sheet", 64, 32, &frames, Path::new("out")).unwrap();
assert!(atlas.descriptor.contains("<key>idle_0</key>"));
// The caller writes atlas.descriptor to atlas.descriptor_path and puts a
// copy of the full sheet image at atlas.texture_path.
```

Frame rectangles use top-left-origin pixel coordinates. Atlas export flips
them to the bottom-left-origin convention the descriptor format expects;
direct slicing does not. See [flip_rect_y] if you drive the lower-level
pieces ([resolve], [crop], [render_descriptor]) yourself.

*/

pub(crate) mod crop;
pub(crate) mod error;
pub(crate) mod export;
pub(crate) mod frame;
pub(crate) mod plist;

/// A specialized `Result` type for sprite slicing functions.
pub type Result<T> = std::result::Result<T, SliceError>;

pub use crop::crop;
pub use error::SliceError;
pub use export::{check_unique_names, export_atlas, slice_sheet, AtlasExport, SlicedSprite};
pub use frame::{flip_rect_y, resolve, Alignment, Frame, RawFrame, Rect};
pub use plist::render_descriptor;
