//! Content-stream builder for a single page.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use warrant_render_core::PaintMode;
use warrant_render_core::utils::{flip_y, rotation_matrix};
use warrant_types::{Color, Point, Rect};

/// Control-point distance for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

/// Graphics state already emitted into the page's content stream.
#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(String, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Accumulates the operations of one page, flipping layout coordinates to
/// PDF user space and skipping redundant state changes.
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

/// A positioned run of encoded text.
pub(crate) struct TextRun<'a> {
    pub font_resource: &'a str,
    pub font_size: f32,
    pub color: Color,
    pub bytes: Vec<u8>,
    pub origin: Point,
    /// Shift along the baseline applied before rotation (alignment).
    pub offset: f32,
    pub rotation: f32,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn color_operands(color: Color) -> Vec<Object> {
        color.to_unit().into_iter().map(Object::from).collect()
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op("rg", Self::color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.op("RG", Self::color_operands(color));
            self.state.stroke_color = Some(color);
        }
    }

    pub fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, resource: &str, size: f32) {
        let unchanged = self
            .state
            .font
            .as_ref()
            .is_some_and(|(name, current)| name == resource && *current == size);
        if !unchanged {
            self.op(
                "Tf",
                vec![Object::Name(resource.as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((resource.to_string(), size));
        }
    }

    pub fn show_text(&mut self, run: TextRun<'_>) {
        if run.bytes.is_empty() {
            return;
        }
        let x = run.origin.x;
        let y = flip_y(run.origin.y, self.page_height);

        self.op("BT", vec![]);
        self.set_font(run.font_resource, run.font_size);
        self.set_fill_color(run.color);
        if run.rotation == 0.0 {
            self.op("Td", vec![(x + run.offset).into(), y.into()]);
        } else {
            let [a, b, c, d] = rotation_matrix(run.rotation);
            let start_x = x + run.offset * a;
            let start_y = y + run.offset * b;
            self.op(
                "Tm",
                vec![a.into(), b.into(), c.into(), d.into(), start_x.into(), start_y.into()],
            );
        }
        self.op(
            "Tj",
            vec![Object::String(run.bytes, StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    pub fn line(&mut self, from: Point, to: Point) {
        self.move_to(from.x, flip_y(from.y, self.page_height));
        self.line_to(to.x, flip_y(to.y, self.page_height));
        self.op("S", vec![]);
    }

    pub fn rect(&mut self, rect: Rect, paint: PaintMode) {
        let bottom = flip_y(rect.bottom(), self.page_height);
        self.op(
            "re",
            vec![rect.x.into(), bottom.into(), rect.width.into(), rect.height.into()],
        );
        self.paint(paint);
    }

    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: PaintMode) {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if r == 0.0 {
            return self.rect(rect, paint);
        }
        let k = r * KAPPA;
        let (x0, x1) = (rect.x, rect.right());
        let y0 = flip_y(rect.bottom(), self.page_height);
        let y1 = flip_y(rect.y, self.page_height);

        self.move_to(x0 + r, y0);
        self.line_to(x1 - r, y0);
        self.curve_to([x1 - r + k, y0], [x1, y0 + r - k], [x1, y0 + r]);
        self.line_to(x1, y1 - r);
        self.curve_to([x1, y1 - r + k], [x1 - r + k, y1], [x1 - r, y1]);
        self.line_to(x0 + r, y1);
        self.curve_to([x0 + r - k, y1], [x0, y1 - r + k], [x0, y1 - r]);
        self.line_to(x0, y0 + r);
        self.curve_to([x0, y0 + r - k], [x0 + r - k, y0], [x0 + r, y0]);
        self.op("h", vec![]);
        self.paint(paint);
    }

    pub fn circle(&mut self, center: Point, radius: f32, paint: PaintMode) {
        let (cx, cy, r) = (center.x, flip_y(center.y, self.page_height), radius);
        let k = r * KAPPA;

        self.move_to(cx + r, cy);
        self.curve_to([cx + r, cy + k], [cx + k, cy + r], [cx, cy + r]);
        self.curve_to([cx - k, cy + r], [cx - r, cy + k], [cx - r, cy]);
        self.curve_to([cx - r, cy - k], [cx - k, cy - r], [cx, cy - r]);
        self.curve_to([cx + k, cy - r], [cx + r, cy - k], [cx + r, cy]);
        self.op("h", vec![]);
        self.paint(paint);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.op("m", vec![x.into(), y.into()]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.op("l", vec![x.into(), y.into()]);
    }

    fn curve_to(&mut self, c1: [f32; 2], c2: [f32; 2], end: [f32; 2]) {
        self.op(
            "c",
            [c1, c2, end].iter().flatten().map(|v| Object::from(*v)).collect(),
        );
    }

    fn paint(&mut self, paint: PaintMode) {
        let operator = match paint {
            PaintMode::Fill => "f",
            PaintMode::Stroke => "S",
            PaintMode::FillStroke => "B",
        };
        self.op(operator, vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(page: PageContext) -> Vec<String> {
        page.finish()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    #[test]
    fn test_redundant_color_changes_are_skipped() {
        let mut page = PageContext::new(842.0);
        page.set_fill_color(Color::BLACK);
        page.set_fill_color(Color::BLACK);
        page.set_stroke_color(Color::BLACK);
        page.set_line_width(1.0);
        page.set_line_width(1.0);
        assert_eq!(operators(page), vec!["rg", "RG", "w"]);
    }

    #[test]
    fn test_text_run_emits_one_text_object() {
        let mut page = PageContext::new(842.0);
        let run = |bytes: &[u8]| TextRun {
            font_resource: "F1",
            font_size: 12.0,
            color: Color::BLACK,
            bytes: bytes.to_vec(),
            origin: Point::new(10.0, 20.0),
            offset: 0.0,
            rotation: 0.0,
        };
        page.show_text(run(b"hello"));
        page.show_text(run(b"again"));
        page.show_text(run(b""));
        assert_eq!(
            operators(page),
            vec!["BT", "Tf", "rg", "Td", "Tj", "ET", "BT", "Td", "Tj", "ET"]
        );
    }

    #[test]
    fn test_rotated_text_uses_text_matrix() {
        let mut page = PageContext::new(842.0);
        page.show_text(TextRun {
            font_resource: "F1",
            font_size: 16.0,
            color: Color::BLACK,
            bytes: b"STAMP".to_vec(),
            origin: Point::new(100.0, 100.0),
            offset: -20.0,
            rotation: 15.0,
        });
        assert!(operators(page).contains(&"Tm".to_string()));
    }

    #[test]
    fn test_shapes_close_and_paint() {
        let mut page = PageContext::new(842.0);
        page.rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 6.0, PaintMode::Fill);
        page.circle(Point::new(50.0, 50.0), 10.0, PaintMode::Stroke);
        let ops = operators(page);
        assert_eq!(ops.iter().filter(|o| *o == "c").count(), 8);
        assert_eq!(ops.iter().filter(|o| *o == "h").count(), 2);
        assert_eq!(ops.last().map(String::as_str), Some("S"));
    }

    #[test]
    fn test_zero_radius_falls_back_to_plain_rect() {
        let mut page = PageContext::new(842.0);
        page.rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, PaintMode::FillStroke);
        assert_eq!(operators(page), vec!["re", "B"]);
    }
}
