use crate::{Frame, Rect};

/// Render a cocos2d format 2 sprite-sheet descriptor as an XML property
/// list.
///
/// `texture_file_name` is written verbatim as both `realTextureFileName`
/// and `textureFileName`; `width` and `height` are the full sheet's
/// dimensions. Frames are emitted in the order given, and their
/// rectangles are serialized exactly as received, fractional parts and
/// all. The renderer performs no coordinate flipping; for atlas export
/// the caller flips each rectangle to bottom-left origin first (see
/// [flip_rect_y](crate::flip_rect_y)).
pub fn render_descriptor(
    texture_file_name: &str,
    width: u32,
    height: u32,
    frames: &[Frame],
) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n");
    out.push_str("<plist version=\"1.0\">\n");
    out.push_str("<dict>\n");
    out.push_str("    <key>frames</key>\n");
    out.push_str("    <dict>\n");
    for frame in frames {
        render_frame_entry(&mut out, frame);
    }
    out.push_str("    </dict>\n");
    out.push_str("    <key>metadata</key>\n");
    out.push_str("    <dict>\n");
    out.push_str("        <key>format</key>\n");
    out.push_str("        <integer>2</integer>\n");
    out.push_str("        <key>realTextureFileName</key>\n");
    out.push_str(&format!(
        "        <string>{}</string>\n",
        escape_xml(texture_file_name)
    ));
    out.push_str("        <key>size</key>\n");
    out.push_str(&format!(
        "        <string>{{{},{}}}</string>\n",
        width, height
    ));
    out.push_str("        <key>textureFileName</key>\n");
    out.push_str(&format!(
        "        <string>{}</string>\n",
        escape_xml(texture_file_name)
    ));
    out.push_str("    </dict>\n");
    out.push_str("</dict>\n");
    out.push_str("</plist>\n");
    out
}

fn render_frame_entry(out: &mut String, frame: &Frame) {
    let r = frame.rect;
    out.push_str(&format!(
        "        <key>{}</key>\n",
        escape_xml(&frame.name)
    ));
    out.push_str("        <dict>\n");
    out.push_str("            <key>frame</key>\n");
    out.push_str(&format!(
        "            <string>{}</string>\n",
        rect_string(r)
    ));
    out.push_str("            <key>offset</key>\n");
    out.push_str("            <string>{0,0}</string>\n");
    out.push_str("            <key>rotated</key>\n");
    out.push_str("            <false/>\n");
    out.push_str("            <key>sourceColorRect</key>\n");
    out.push_str(&format!(
        "            <string>{{{},{}}}</string>\n",
        point(0.0, 0.0),
        point(r.width, r.height)
    ));
    out.push_str("            <key>sourceSize</key>\n");
    out.push_str(&format!(
        "            <string>{}</string>\n",
        point(r.width, r.height)
    ));
    out.push_str("        </dict>\n");
}

// "{x,y}" with the components' native float formatting.
fn point(x: f32, y: f32) -> String {
    format!("{{{},{}}}", x, y)
}

// "{{x,y},{w,h}}"
fn rect_string(r: Rect) -> String {
    format!("{{{},{}}}", point(r.x, r.y), point(r.width, r.height))
}

// Frame names become XML keys; escape the three metacharacters so the
// document stays well formed. Everything else passes through untouched.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
