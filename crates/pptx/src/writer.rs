//! Deck writer: assembles the single-slide PPTX package.

use bmc_core::{BlockContent, BusinessModelCanvas, Error, Result, PLACEHOLDER};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::layout::{
    self, hex_color, BlockLayout, DECK_TITLE, GRID, TITLE_HEIGHT_IN, TITLE_LEFT_IN, TITLE_TOP_IN,
    TITLE_WIDTH_IN,
};
use crate::parts;

const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Font sizes in hundredths of a point.
const TITLE_FONT_SIZE: &str = "3200";
const HEADER_FONT_SIZE: &str = "1400";
const BODY_FONT_SIZE: &str = "1000";

/// Block border: 2 pt, in EMU.
const BORDER_WIDTH_EMU: &str = "25400";

/// Text-frame inset: 0.1 in, in EMU.
const TEXT_INSET_EMU: &str = "91440";

/// Writer producing a one-slide deck from a canvas.
///
/// Rendering is deterministic: a given canvas always yields identical
/// bytes. Each block reads only its own section key, so sections absent
/// from the canvas render with the placeholder bullet without affecting
/// their neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckWriter;

impl DeckWriter {
    /// Create a new deck writer.
    pub fn new() -> Self {
        Self
    }

    /// Render the canvas to PPTX bytes.
    pub fn render(&self, canvas: &BusinessModelCanvas) -> Result<Vec<u8>> {
        let slide_xml = build_slide_xml(canvas)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        write_part(&mut zip, options, "[Content_Types].xml", parts::CONTENT_TYPES)?;
        write_part(&mut zip, options, "_rels/.rels", parts::ROOT_RELS)?;
        write_part(&mut zip, options, "ppt/presentation.xml", &parts::presentation())?;
        write_part(
            &mut zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            parts::PRESENTATION_RELS,
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER,
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS,
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::SLIDE_LAYOUT,
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::SLIDE_LAYOUT_RELS,
        )?;
        write_part(&mut zip, options, "ppt/theme/theme1.xml", parts::THEME)?;
        write_part(&mut zip, options, "ppt/slides/slide1.xml", &slide_xml)?;
        write_part(
            &mut zip,
            options,
            "ppt/slides/_rels/slide1.xml.rels",
            parts::SLIDE_RELS,
        )?;
        write_part(&mut zip, options, "docProps/core.xml", parts::DOC_PROPS_CORE)?;
        write_part(&mut zip, options, "docProps/app.xml", parts::DOC_PROPS_APP)?;

        let cursor = zip
            .finish()
            .map_err(|e| Error::Zip(format!("Failed to finalize archive: {e}")))?;
        let bytes = cursor.into_inner();

        log::debug!("rendered deck: {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Add one part to the package.
fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    name: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| Error::Zip(format!("Failed to start part '{name}': {e}")))?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

/// Build `ppt/slides/slide1.xml`: the title box plus one shape per grid
/// block, in grid order.
fn build_slide_xml(canvas: &BusinessModelCanvas) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    let mut root = BytesStart::new("p:sld");
    root.push_attribute(("xmlns:a", NS_DRAWING));
    root.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    root.push_attribute(("xmlns:p", NS_PRESENTATION));
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    start(&mut writer, "p:cSld")?;
    start(&mut writer, "p:spTree")?;

    // Group properties required at the head of every shape tree.
    start(&mut writer, "p:nvGrpSpPr")?;
    empty_with(&mut writer, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    empty(&mut writer, "p:cNvGrpSpPr")?;
    empty(&mut writer, "p:nvPr")?;
    end(&mut writer, "p:nvGrpSpPr")?;
    start(&mut writer, "p:grpSpPr")?;
    start(&mut writer, "a:xfrm")?;
    empty_with(&mut writer, "a:off", &[("x", "0"), ("y", "0")])?;
    empty_with(&mut writer, "a:ext", &[("cx", "0"), ("cy", "0")])?;
    empty_with(&mut writer, "a:chOff", &[("x", "0"), ("y", "0")])?;
    empty_with(&mut writer, "a:chExt", &[("cx", "0"), ("cy", "0")])?;
    end(&mut writer, "a:xfrm")?;
    end(&mut writer, "p:grpSpPr")?;

    write_title_shape(&mut writer)?;

    // Shape ids 1 and 2 are taken by the group and the title.
    for (index, block) in GRID.iter().enumerate() {
        let content = canvas.get(block.section.label());
        write_block_shape(&mut writer, index as u32 + 3, block, content)?;
    }

    end(&mut writer, "p:spTree")?;
    end(&mut writer, "p:cSld")?;
    start(&mut writer, "p:clrMapOvr")?;
    empty(&mut writer, "a:masterClrMapping")?;
    end(&mut writer, "p:clrMapOvr")?;
    end(&mut writer, "p:sld")?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("Slide XML is not UTF-8: {e}")))
}

/// The centered bold deck title above the grid.
fn write_title_shape<W: Write>(w: &mut Writer<W>) -> Result<()> {
    start(w, "p:sp")?;

    start(w, "p:nvSpPr")?;
    empty_with(w, "p:cNvPr", &[("id", "2"), ("name", "Title")])?;
    empty_with(w, "p:cNvSpPr", &[("txBox", "1")])?;
    empty(w, "p:nvPr")?;
    end(w, "p:nvSpPr")?;

    start(w, "p:spPr")?;
    write_xfrm(w, TITLE_LEFT_IN, TITLE_TOP_IN, TITLE_WIDTH_IN, TITLE_HEIGHT_IN)?;
    start_with(w, "a:prstGeom", &[("prst", "rect")])?;
    empty(w, "a:avLst")?;
    end(w, "a:prstGeom")?;
    empty(w, "a:noFill")?;
    end(w, "p:spPr")?;

    start(w, "p:txBody")?;
    empty_with(w, "a:bodyPr", &[("wrap", "square")])?;
    empty(w, "a:lstStyle")?;
    start(w, "a:p")?;
    empty_with(w, "a:pPr", &[("algn", "ctr")])?;
    write_run(w, DECK_TITLE, TITLE_FONT_SIZE, true)?;
    end(w, "a:p")?;
    end(w, "p:txBody")?;

    end(w, "p:sp")
}

/// One grid block: filled bordered rectangle, bold section header, then
/// one bulleted paragraph per content line.
fn write_block_shape<W: Write>(
    w: &mut Writer<W>,
    id: u32,
    block: &BlockLayout,
    content: Option<&BlockContent>,
) -> Result<()> {
    let label = block.section.label();
    let id_attr = id.to_string();
    let fill = hex_color(block.fill);

    start(w, "p:sp")?;

    start(w, "p:nvSpPr")?;
    empty_with(w, "p:cNvPr", &[("id", id_attr.as_str()), ("name", label)])?;
    empty(w, "p:cNvSpPr")?;
    empty(w, "p:nvPr")?;
    end(w, "p:nvSpPr")?;

    start(w, "p:spPr")?;
    write_xfrm(w, block.left, block.top, block.width, block.height)?;
    start_with(w, "a:prstGeom", &[("prst", "rect")])?;
    empty(w, "a:avLst")?;
    end(w, "a:prstGeom")?;
    start(w, "a:solidFill")?;
    empty_with(w, "a:srgbClr", &[("val", fill.as_str())])?;
    end(w, "a:solidFill")?;
    start_with(w, "a:ln", &[("w", BORDER_WIDTH_EMU)])?;
    start(w, "a:solidFill")?;
    empty_with(w, "a:srgbClr", &[("val", "000000")])?;
    end(w, "a:solidFill")?;
    end(w, "a:ln")?;
    end(w, "p:spPr")?;

    start(w, "p:txBody")?;
    empty_with(
        w,
        "a:bodyPr",
        &[
            ("wrap", "square"),
            ("lIns", TEXT_INSET_EMU),
            ("tIns", TEXT_INSET_EMU),
            ("rIns", TEXT_INSET_EMU),
            ("bIns", TEXT_INSET_EMU),
        ],
    )?;
    empty(w, "a:lstStyle")?;

    start(w, "a:p")?;
    write_run(w, label, HEADER_FONT_SIZE, true)?;
    end(w, "a:p")?;

    for line in content_lines(content) {
        start(w, "a:p")?;
        write_run(w, &format!("• {line}"), BODY_FONT_SIZE, false)?;
        end(w, "a:p")?;
    }

    end(w, "p:txBody")?;
    end(w, "p:sp")
}

/// Flatten a block's content into the bullet lines to draw.
///
/// Lists keep non-empty items verbatim (trimmed); strings split on line
/// breaks, each line trimmed and capitalized. Anything left without a
/// single line renders as the placeholder bullet.
fn content_lines(content: Option<&BlockContent>) -> Vec<String> {
    let lines: Vec<String> = match content {
        Some(BlockContent::Items(items)) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Some(BlockContent::Text(text)) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(capitalize)
            .collect(),
        None => Vec::new(),
    };

    if lines.is_empty() {
        vec![PLACEHOLDER.to_string()]
    } else {
        lines
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_xfrm<W: Write>(w: &mut Writer<W>, left: f64, top: f64, width: f64, height: f64) -> Result<()> {
    let x = layout::emu(left).to_string();
    let y = layout::emu(top).to_string();
    let cx = layout::emu(width).to_string();
    let cy = layout::emu(height).to_string();

    start(w, "a:xfrm")?;
    empty_with(w, "a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    empty_with(w, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    end(w, "a:xfrm")
}

/// One text run with the deck's fixed black font.
fn write_run<W: Write>(w: &mut Writer<W>, text: &str, size: &str, bold: bool) -> Result<()> {
    start(w, "a:r")?;

    let mut rpr = BytesStart::new("a:rPr");
    rpr.push_attribute(("lang", "en-US"));
    rpr.push_attribute(("sz", size));
    if bold {
        rpr.push_attribute(("b", "1"));
    }
    w.write_event(Event::Start(rpr)).map_err(xml_err)?;
    start(w, "a:solidFill")?;
    empty_with(w, "a:srgbClr", &[("val", "000000")])?;
    end(w, "a:solidFill")?;
    end(w, "a:rPr")?;

    start(w, "a:t")?;
    w.write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    end(w, "a:t")?;

    end(w, "a:r")
}

fn xml_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Xml(e.to_string())
}

fn start<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)
}

fn start_with<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, *value));
    }
    w.write_event(Event::Start(element)).map_err(xml_err)
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)
}

fn empty<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::Empty(BytesStart::new(name)))
        .map_err(xml_err)
}

fn empty_with<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, *value));
    }
    w.write_event(Event::Empty(element)).map_err(xml_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmc_core::Section;
    use quick_xml::Reader;
    use std::io::Read;
    use zip::ZipArchive;

    fn render(canvas: &BusinessModelCanvas) -> Vec<u8> {
        DeckWriter::new().render(canvas).unwrap()
    }

    fn read_slide_xml(bytes: &[u8]) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name("ppt/slides/slide1.xml").unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    /// Walk the slide XML and collect (shape name, text runs) per shape.
    fn shape_texts(bytes: &[u8]) -> Vec<(String, Vec<String>)> {
        let xml = read_slide_xml(bytes);
        let mut reader = Reader::from_str(&xml);
        reader.trim_text(true);

        let mut shapes: Vec<(String, Vec<String>)> = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"p:sp" => current = Some((String::new(), Vec::new())),
                    b"a:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"p:cNvPr" => {
                    if let Some((name, _)) = current.as_mut() {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"name" {
                                *name = String::from_utf8_lossy(&attr.value).to_string();
                            }
                        }
                    }
                }
                Ok(Event::Text(ref e)) if in_text => {
                    if let Some((_, texts)) = current.as_mut() {
                        texts.push(e.unescape().unwrap().to_string());
                    }
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"p:sp" => {
                        if let Some(shape) = current.take() {
                            shapes.push(shape);
                        }
                    }
                    b"a:t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => panic!("XML error: {e}"),
                _ => {}
            }
        }

        shapes
    }

    /// Walk the slide XML and collect (shape name, (x, y)) per shape.
    fn shape_offsets(bytes: &[u8]) -> Vec<(String, (i64, i64))> {
        let xml = read_slide_xml(bytes);
        let mut reader = Reader::from_str(&xml);
        reader.trim_text(true);

        let mut offsets = Vec::new();
        let mut current_name: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"p:cNvPr" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"name" {
                            let name = String::from_utf8_lossy(&attr.value).to_string();
                            if !name.is_empty() {
                                current_name = Some(name);
                            }
                        }
                    }
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"a:off" => {
                    let mut x = 0i64;
                    let mut y = 0i64;
                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"x" => x = value.parse().unwrap(),
                            b"y" => y = value.parse().unwrap(),
                            _ => {}
                        }
                    }
                    if let Some(name) = current_name.take() {
                        offsets.push((name, (x, y)));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("XML error: {e}"),
                _ => {}
            }
        }

        offsets
    }

    fn block_lines<'a>(shapes: &'a [(String, Vec<String>)], name: &str) -> &'a [String] {
        let (_, texts) = shapes
            .iter()
            .find(|(shape_name, _)| shape_name == name)
            .unwrap_or_else(|| panic!("no shape named '{name}'"));
        // First run is the header label.
        &texts[1..]
    }

    fn full_canvas() -> BusinessModelCanvas {
        let mut canvas = BusinessModelCanvas::new();
        for section in Section::ALL {
            canvas.insert(section.label(), format!("{} content.", section.label()));
        }
        canvas
    }

    #[test]
    fn test_deck_contains_title_and_nine_blocks() {
        let bytes = render(&full_canvas());
        let shapes = shape_texts(&bytes);

        // Title plus nine blocks.
        assert_eq!(shapes.len(), 10);
        assert_eq!(shapes[0].0, "Title");
        assert_eq!(shapes[0].1, vec![DECK_TITLE.to_string()]);

        for section in Section::ALL {
            let (_, texts) = shapes
                .iter()
                .find(|(name, _)| name == section.label())
                .unwrap_or_else(|| panic!("no block for '{}'", section.label()));
            assert_eq!(texts[0], section.label(), "header line");
        }
    }

    #[test]
    fn test_blocks_sit_at_fixed_positions() {
        let bytes = render(&full_canvas());
        let offsets = shape_offsets(&bytes);

        let expect = |name: &str, x_in: f64, y_in: f64| {
            let (_, (x, y)) = offsets
                .iter()
                .find(|(shape_name, _)| shape_name == name)
                .unwrap_or_else(|| panic!("no shape named '{name}'"));
            assert_eq!(*x, layout::emu(x_in), "{name} x");
            assert_eq!(*y, layout::emu(y_in), "{name} y");
        };

        expect("Title", 0.5, 0.3);
        expect("Key Partners", 0.5, 1.2);
        expect("Key Resources", 3.0, 3.0);
        expect("Value Propositions", 5.5, 1.2);
        expect("Customer Segments", 10.5, 1.2);
        expect("Cost Structure", 0.5, 4.8);
        expect("Revenue Streams", 6.6, 4.8);
    }

    #[test]
    fn test_missing_sections_render_placeholder() {
        let bytes = render(&BusinessModelCanvas::new());
        let shapes = shape_texts(&bytes);

        for section in Section::ALL {
            assert_eq!(
                block_lines(&shapes, section.label()),
                &["• —".to_string()],
                "section '{}'",
                section.label()
            );
        }
    }

    #[test]
    fn test_string_content_splits_trims_and_capitalizes() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Key Activities", "  first point \n\n second point \nThird");
        let bytes = render(&canvas);
        let shapes = shape_texts(&bytes);

        assert_eq!(
            block_lines(&shapes, "Key Activities"),
            &[
                "• First point".to_string(),
                "• Second point".to_string(),
                "• Third".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_content_keeps_items_verbatim() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert(
            "Channels",
            vec![
                "  online store  ".to_string(),
                String::new(),
                "retail partners".to_string(),
            ],
        );
        let bytes = render(&canvas);
        let shapes = shape_texts(&bytes);

        // Trimmed but not capitalized; empty items dropped.
        assert_eq!(
            block_lines(&shapes, "Channels"),
            &["• online store".to_string(), "• retail partners".to_string()]
        );
    }

    #[test]
    fn test_empty_string_and_empty_list_render_placeholder() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Channels", "   \n  ");
        canvas.insert("Cost Structure", Vec::<String>::new());
        let bytes = render(&canvas);
        let shapes = shape_texts(&bytes);

        assert_eq!(block_lines(&shapes, "Channels"), &["• —".to_string()]);
        assert_eq!(block_lines(&shapes, "Cost Structure"), &["• —".to_string()]);
    }

    #[test]
    fn test_single_key_canvas_leaves_other_blocks_untouched() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Key Partners", "We partner with installers.");
        let bytes = render(&canvas);
        let shapes = shape_texts(&bytes);

        assert_eq!(
            block_lines(&shapes, "Key Partners"),
            &["• We partner with installers.".to_string()]
        );
        for section in Section::ALL {
            if section != Section::KeyPartners {
                assert_eq!(
                    block_lines(&shapes, section.label()),
                    &["• —".to_string()],
                    "section '{}'",
                    section.label()
                );
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let canvas = full_canvas();
        assert_eq!(render(&canvas), render(&canvas));
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let bytes = render(&BusinessModelCanvas::new());
        let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn test_deck_starts_with_zip_magic() {
        let bytes = render(&BusinessModelCanvas::new());
        assert!(bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]));
    }

    #[test]
    fn test_block_fill_colors_present() {
        let bytes = render(&full_canvas());
        let xml = read_slide_xml(&bytes);

        for block in &GRID {
            let fill = format!(r#"<a:srgbClr val="{}"/>"#, hex_color(block.fill));
            assert!(
                xml.contains(&fill),
                "missing fill {} for '{}'",
                hex_color(block.fill),
                block.section.label()
            );
        }
    }

    #[test]
    fn test_text_is_xml_escaped() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Channels", "Partners & <resellers>.");
        let bytes = render(&canvas);

        let xml = read_slide_xml(&bytes);
        assert!(xml.contains("Partners &amp; &lt;resellers&gt;."));

        let shapes = shape_texts(&bytes);
        assert_eq!(
            block_lines(&shapes, "Channels"),
            &["• Partners & <resellers>.".to_string()]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize("über uns"), "Über uns");
        assert_eq!(capitalize("—"), "—");
        assert_eq!(capitalize(""), "");
    }
}
