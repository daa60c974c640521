//
// Plays the host-environment role around the spritecut library: decodes a
// sheet, cuts it into a left and a right half, and writes both export
// modes into an output directory.
//
// A real caller would read the frame list from its own slicing metadata
// instead of hard-coding it; the library does not care where it comes
// from.
//
// Usage: cargo run --example slice -- <sheet.png> <out-dir>
//
use image::RgbaImage;
use spritecut::{export_atlas, slice_sheet, Alignment, RawFrame, Rect};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: slice <sheet.png> <out-dir>");
        process::exit(1);
    }
    if let Err(err) = run(Path::new(&args[1]), Path::new(&args[2])) {
        eprintln!("Export failed: {}", err);
        process::exit(1);
    }
}

fn run(sheet_path: &Path, out_dir: &Path) -> spritecut::Result<()> {
    let sheet: RgbaImage = image::open(sheet_path)
        .expect("could not decode sheet image")
        .to_rgba8();
    let (width, height) = sheet.dimensions();
    let half = width as f32 / 2.0;

    let frames = vec![
        RawFrame {
            name: "left".to_owned(),
            rect: Rect::new(0.0, 0.0, half, height as f32),
            alignment: Alignment::BottomLeft,
        },
        RawFrame {
            name: "right".to_owned(),
            rect: Rect::new(half, 0.0, half, height as f32),
            alignment: Alignment::Center,
        },
    ];

    fs::create_dir_all(out_dir)?;

    // Slice mode: one PNG per frame.
    for sprite in slice_sheet(&sheet, &frames, out_dir)? {
        sprite
            .image
            .save(&sprite.path)
            .expect("could not encode sprite");
        println!("Wrote {}", sprite.path.display());
    }

    // Atlas mode: a descriptor beside a copy of the full sheet.
    let base = sheet_path
        .file_stem()
        .expect("sheet path has no file name")
        .to_string_lossy();
    let atlas = export_atlas(&base, width, height, &frames, out_dir)?;
    fs::write(&atlas.descriptor_path, &atlas.descriptor)?;
    fs::copy(sheet_path, &atlas.texture_path)?;
    println!("Wrote {}", atlas.descriptor_path.display());

    Ok(())
}
