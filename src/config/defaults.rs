//! Fixed card geometry and rendering defaults.
//!
//! Lengths are in mm, font sizes and line weights in points.

/// Millimetres per PDF point
pub const PT_TO_MM: f32 = 0.352_778;

/// A4 page width in mm
pub const PAGE_WIDTH: f32 = 210.0;

/// A4 page height in mm
pub const PAGE_HEIGHT: f32 = 297.0;

/// Page margin on all sides (20pt)
pub const PAGE_MARGIN: f32 = 20.0 * PT_TO_MM;

/// Outer card width (6.1 cm)
pub const CARD_WIDTH: f32 = 61.0;

/// Outer card height (8.7 cm)
pub const CARD_HEIGHT: f32 = 87.0;

/// Inner panel width (5.2 cm)
pub const PANEL_WIDTH: f32 = 52.0;

/// Inner panel height (2.5 cm)
pub const PANEL_HEIGHT: f32 = 25.0;

/// Distance from the card's bottom edge to the inner panel (0.7 cm)
pub const PANEL_MARGIN_BOTTOM: f32 = 7.0;

/// Base gap between columns (0.2 cm)
pub const HORIZONTAL_GAP: f32 = 2.0;

/// Base gap between rows (0.2 cm)
pub const VERTICAL_GAP: f32 = 2.0;

pub const GRID_COLUMNS: usize = 3;
pub const GRID_ROWS: usize = 3;
pub const CARDS_PER_PAGE: usize = GRID_COLUMNS * GRID_ROWS;

/// Card cut-guide line weight in points
pub const CARD_OUTLINE_THICKNESS: f32 = 0.5;

/// Inner panel corner radius (5pt)
pub const PANEL_CORNER_RADIUS: f32 = 5.0 * PT_TO_MM;

/// Padding between the inner panel border and the ability text (3pt)
pub const PANEL_TEXT_PADDING: f32 = 3.0 * PT_TO_MM;

/// Name label font size in points
pub const NAME_FONT_SIZE: f32 = 12.0;

/// Distance from the card top down to the name baseline (20pt)
pub const NAME_OFFSET_FROM_TOP: f32 = 20.0 * PT_TO_MM;

/// Starting size for ability text
pub const ABILITY_FONT_SIZE: f32 = 8.0;

/// Smallest size the text fitter will shrink to
pub const ABILITY_MIN_FONT_SIZE: f32 = 4.0;

/// Shrink step for the text fitter
pub const ABILITY_FONT_STEP: f32 = 0.5;

/// Line leading as a multiple of the font size
pub const LINE_LEADING: f32 = 1.5;

/// Overview table name column font size
pub const OVERVIEW_NAME_FONT_SIZE: f32 = 10.0;

/// Overview table ability column font size
pub const OVERVIEW_ABILITY_FONT_SIZE: f32 = 6.0;

/// Overview table cell padding (5pt)
pub const OVERVIEW_CELL_PADDING: f32 = 5.0 * PT_TO_MM;

/// Space above the overview table (10pt)
pub const OVERVIEW_SPACING_BEFORE: f32 = 10.0 * PT_TO_MM;

/// Relative column widths of the overview table (name, ability)
pub const OVERVIEW_COLUMN_RATIO: (f32, f32) = (1.0, 3.0);

/// Overview cell border line weight in points
pub const OVERVIEW_BORDER_THICKNESS: f32 = 0.5;

/// Inner panel fill: beige, readable and still printable on transparency
pub const DEFAULT_BACKGROUND_COLOR: (u8, u8, u8) = (0xF5, 0xF5, 0xDC);

/// Text and panel border color
pub const DEFAULT_TEXT_COLOR: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Directory holding characters.json and the language overlays
pub const DEFAULT_DATA_DIR: &str = "assets/data";
