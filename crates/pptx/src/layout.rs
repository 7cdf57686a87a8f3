//! Static slide geometry and fill colors for the canvas grid.
//!
//! All positions are in inches on a 13.33 x 7.5 slide. Geometry never
//! depends on content: overflowing text wraps inside its block.

use bmc_core::Section;

/// English Metric Units per inch, the unit OOXML geometry is stored in.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Slide size in inches (16:9 widescreen).
pub const SLIDE_WIDTH_IN: f64 = 13.33;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Title box geometry in inches.
pub const TITLE_LEFT_IN: f64 = 0.5;
pub const TITLE_TOP_IN: f64 = 0.3;
pub const TITLE_WIDTH_IN: f64 = 12.33;
pub const TITLE_HEIGHT_IN: f64 = 0.6;

/// Title text on the deck's single slide.
pub const DECK_TITLE: &str = "The Business Model Canvas";

/// One block of the canvas grid: a section bound to a fixed rectangle
/// and a pastel fill.
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    pub section: Section,
    /// Left edge in inches.
    pub left: f64,
    /// Top edge in inches.
    pub top: f64,
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
    /// Fill color as RGB.
    pub fill: [u8; 3],
}

/// The nine-block grid.
///
/// Top band (3.5 in tall): five columns, with Key Activities / Key
/// Resources and Customer Relationships / Channels stacked in columns
/// two and four. Bottom band (2 in tall): Cost Structure and a wider
/// Revenue Streams.
pub const GRID: [BlockLayout; 9] = [
    BlockLayout {
        section: Section::KeyPartners,
        left: 0.5,
        top: 1.2,
        width: 2.4,
        height: 3.5,
        fill: [230, 230, 250], // lavender
    },
    BlockLayout {
        section: Section::KeyActivities,
        left: 3.0,
        top: 1.2,
        width: 2.4,
        height: 1.7,
        fill: [255, 240, 245], // lavender blush
    },
    BlockLayout {
        section: Section::KeyResources,
        left: 3.0,
        top: 3.0,
        width: 2.4,
        height: 1.7,
        fill: [240, 255, 240], // honeydew
    },
    BlockLayout {
        section: Section::ValuePropositions,
        left: 5.5,
        top: 1.2,
        width: 2.4,
        height: 3.5,
        fill: [255, 250, 205], // lemon chiffon
    },
    BlockLayout {
        section: Section::CustomerRelationships,
        left: 8.0,
        top: 1.2,
        width: 2.4,
        height: 1.7,
        fill: [255, 228, 225], // misty rose
    },
    BlockLayout {
        section: Section::Channels,
        left: 8.0,
        top: 3.0,
        width: 2.4,
        height: 1.7,
        fill: [240, 248, 255], // alice blue
    },
    BlockLayout {
        section: Section::CustomerSegments,
        left: 10.5,
        top: 1.2,
        width: 2.4,
        height: 3.5,
        fill: [255, 245, 238], // seashell
    },
    BlockLayout {
        section: Section::CostStructure,
        left: 0.5,
        top: 4.8,
        width: 6.0,
        height: 2.0,
        fill: [245, 245, 220], // beige
    },
    BlockLayout {
        section: Section::RevenueStreams,
        left: 6.6,
        top: 4.8,
        width: 6.3,
        height: 2.0,
        fill: [240, 255, 255], // azure
    },
];

/// Convert inches to EMU.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Format an RGB fill as the uppercase hex string OOXML expects.
pub fn hex_color(rgb: [u8; 3]) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
