use crate::{Result, SliceError};

/// A rectangular region of a sprite sheet, in pixel coordinates with `y`
/// measured from the top edge of the image.
///
/// Components are floats because editor slicing metadata is float-valued;
/// the descriptor renderer serializes them exactly as received. The
/// cropper truncates them to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from the left edge of the image.
    pub x: f32,
    /// Distance from the top edge of the image.
    pub y: f32,
    /// Region width. Must not be negative; zero is legal.
    pub width: f32,
    /// Region height. Must not be negative; zero is legal.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Anchor position of a sprite's pivot.
///
/// The nine named variants map to fixed normalized pivots; `Custom`
/// carries an explicit one, with x and y each in `[0,1]`.
///
/// Note the y convention: pivot y=1 is the top edge and y=0 the bottom,
/// flipped relative to [Rect] coordinates. This reproduces the editor
/// metadata the crate consumes; remap the result of [Alignment::pivot] if
/// your engine anchors differently.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum Alignment {
    Center,
    TopLeft,
    TopCenter,
    TopRight,
    LeftCenter,
    RightCenter,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// An explicit normalized pivot point.
    Custom((f32, f32)),
}

impl Alignment {
    /// Map a numeric alignment id from slicing metadata to a variant.
    ///
    /// Ids follow the editor encoding 0..=9, in the declaration order of
    /// this enum; id 9 is `Custom` and takes its pivot from
    /// `custom_pivot`. For the other ids `custom_pivot` is ignored.
    pub fn from_id(id: u32, custom_pivot: (f32, f32)) -> Result<Alignment> {
        match id {
            0 => Ok(Alignment::Center),
            1 => Ok(Alignment::TopLeft),
            2 => Ok(Alignment::TopCenter),
            3 => Ok(Alignment::TopRight),
            4 => Ok(Alignment::LeftCenter),
            5 => Ok(Alignment::RightCenter),
            6 => Ok(Alignment::BottomLeft),
            7 => Ok(Alignment::BottomCenter),
            8 => Ok(Alignment::BottomRight),
            9 => Ok(Alignment::Custom(custom_pivot)),
            _ => Err(SliceError::InvalidArgument(format!(
                "Unknown alignment id: {}",
                id
            ))),
        }
    }

    /// The normalized pivot for this alignment.
    pub fn pivot(&self) -> (f32, f32) {
        match *self {
            Alignment::Center => (0.5, 0.5),
            Alignment::TopLeft => (0.0, 1.0),
            Alignment::TopCenter => (0.5, 1.0),
            Alignment::TopRight => (1.0, 1.0),
            Alignment::LeftCenter => (0.0, 0.5),
            Alignment::RightCenter => (1.0, 0.5),
            Alignment::BottomLeft => (0.0, 0.0),
            Alignment::BottomCenter => (0.5, 0.0),
            Alignment::BottomRight => (1.0, 0.0),
            Alignment::Custom(pivot) => pivot,
        }
    }
}

/// Per-sprite input record: a name, the region of the sheet it occupies,
/// and its pivot alignment.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Sprite name. Becomes the output file name in slice mode and the
    /// entry key in the atlas descriptor. Must not be empty.
    pub name: String,
    /// The sprite's region of the sheet, y from the top.
    pub rect: Rect,
    /// Pivot alignment.
    pub alignment: Alignment,
}

/// A resolved frame: the pivot has been derived from the alignment. The
/// rectangle is carried over unchanged; the atlas export path flips it
/// via [flip_rect_y] afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sprite name.
    pub name: String,
    /// Normalized pivot, derived from the input alignment.
    pub pivot: (f32, f32),
    /// The sprite's region of the sheet.
    pub rect: Rect,
}

/// Resolve a [RawFrame] into a [Frame].
///
/// Fails with `InvalidArgument` if the frame name is empty or the
/// rectangle has a negative width or height. A zero-area rectangle is
/// legal input and crops to an empty image.
pub fn resolve(raw: &RawFrame) -> Result<Frame> {
    if raw.name.is_empty() {
        return Err(SliceError::InvalidArgument("Empty frame name".into()));
    }
    if raw.rect.width < 0.0 || raw.rect.height < 0.0 {
        return Err(SliceError::InvalidArgument(format!(
            "Negative size for frame '{}': {}x{}",
            raw.name, raw.rect.width, raw.rect.height
        )));
    }
    Ok(Frame {
        name: raw.name.clone(),
        pivot: raw.alignment.pivot(),
        rect: raw.rect,
    })
}

/// Flip a rectangle's y coordinate between top-left and bottom-left
/// origin within an image of the given height.
///
/// Used by the atlas-descriptor export path; direct slicing keeps the
/// top-left convention. Applying the flip twice with the same height
/// returns the original rectangle.
pub fn flip_rect_y(rect: Rect, image_height: u32) -> Rect {
    Rect {
        y: image_height as f32 - (rect.y + rect.height),
        ..rect
    }
}
