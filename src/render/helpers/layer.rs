//! Drawing operation builder for printpdf's op-based page API
//!
//! `LayerBuilder` collects `Op`s for a single page. Drawing only ever appends,
//! so a builder can be handed to several renderers in turn.

use printpdf::{
    Color, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing, Pt,
    TextItem, WindingOrder,
};

/// Bezier control point distance for a quarter circle, as a fraction of the radius
const KAPPA: f32 = 0.552_284_8;

fn point(x: f32, y: f32, bezier: bool) -> LinePoint {
    LinePoint {
        p: Point {
            x: Mm(x).into(),
            y: Mm(y).into(),
        },
        bezier,
    }
}

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Set the fill color (also used for text)
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw a single line of text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: &PdfFontHandle,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: font.clone(),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let points = vec![
            point(x1.0, y1.0, false),
            point(x2.0, y1.0, false),
            point(x2.0, y2.0, false),
            point(x1.0, y2.0, false),
        ];

        self.push_polygon(points, mode);
    }

    /// Add a rectangle with quarter-circle corners
    ///
    /// (x, y) is the lower-left corner. The radius is clamped to half the
    /// shorter side.
    pub fn add_rounded_rect(
        &mut self,
        x: Mm,
        y: Mm,
        width: Mm,
        height: Mm,
        radius: Mm,
        mode: PaintMode,
    ) {
        let (x, y, w, h) = (x.0, y.0, width.0, height.0);
        let r = radius.0.min(w / 2.0).min(h / 2.0).max(0.0);
        let k = KAPPA * r;

        let points = vec![
            // Bottom edge
            point(x + r, y, false),
            point(x + w - r, y, false),
            // Bottom-right corner
            point(x + w - r + k, y, true),
            point(x + w, y + r - k, true),
            point(x + w, y + r, true),
            // Right edge
            point(x + w, y + h - r, false),
            // Top-right corner
            point(x + w, y + h - r + k, true),
            point(x + w - r + k, y + h, true),
            point(x + w - r, y + h, true),
            // Top edge
            point(x + r, y + h, false),
            // Top-left corner
            point(x + r - k, y + h, true),
            point(x, y + h - r + k, true),
            point(x, y + h - r, true),
            // Left edge
            point(x, y + r, false),
            // Bottom-left corner
            point(x, y + r - k, true),
            point(x + r - k, y, true),
            point(x + r, y, true),
        ];

        self.push_polygon(points, mode);
    }

    /// Save graphics state
    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    /// Restore graphics state
    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::BuiltinFont;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        let font = PdfFontHandle::Builtin(BuiltinFont::Helvetica);
        layer.use_text("", 8.0, Mm(0.0), Mm(0.0), &font);
        assert!(layer.is_empty());

        layer.use_text("x", 8.0, Mm(0.0), Mm(0.0), &font);
        assert_eq!(layer.ops().len(), 5);
    }

    #[test]
    fn test_rounded_rect_is_one_closed_polygon() {
        let mut layer = LayerBuilder::new();
        layer.add_rounded_rect(Mm(10.0), Mm(20.0), Mm(52.0), Mm(25.0), Mm(1.76), PaintMode::Fill);

        let ops = layer.into_ops();
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            Op::DrawPolygon { polygon } => {
                let points = &polygon.rings[0].points;
                assert_eq!(points.len(), 17);
                // Path ends where it started
                let (first, last) = (&points[0].p, &points[16].p);
                assert_eq!((first.x.0, first.y.0), (last.x.0, last.y.0));
            }
            _ => panic!("expected a polygon"),
        }
    }
}
