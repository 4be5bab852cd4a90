use crate::config::RenderConfig;
use crate::renderer::DocumentRenderer;
use chrono::{DateTime, TimeZone, Utc};
use warrant_render_core::{ColorTarget, DrawingSurface, Font, PaintMode, RenderError, TextOptions};
use warrant_types::{
    ArrestEntry, Color, CriminalRecord, Point, Rect, Size, WarrantKind, WarrantRecord,
};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        color: Color,
        options: TextOptions,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Rect {
        rect: Rect,
        paint: PaintMode,
        fill: Color,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        paint: PaintMode,
        fill: Color,
    },
    Circle {
        center: Point,
        radius: f32,
    },
}

/// A drawing call and the 1-based page it landed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub page: usize,
    pub op: Op,
}

/// A [`DrawingSurface`] that keeps every call instead of encoding it.
///
/// `finish` returns a debug dump of the calls, so equal inputs give equal bytes.
pub struct RecordingSurface {
    size: Size,
    pages: usize,
    font: Font,
    fill: Color,
    stroke: Color,
    text: Color,
    line_width: f32,
    pub ops: Vec<Recorded>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: 0,
            font: Font::default(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            text: Color::BLACK,
            line_width: 1.0,
            ops: Vec::new(),
        }
    }

    fn record(&mut self, op: Op) -> Result<(), RenderError> {
        if self.pages == 0 {
            return Err(RenderError::Surface("no page has been started".into()));
        }
        self.ops.push(Recorded { page: self.pages, op });
        Ok(())
    }

    /// Every text call as `(page, text)`.
    pub fn texts(&self) -> Vec<(usize, &str)> {
        self.ops
            .iter()
            .filter_map(|r| match &r.op {
                Op::Text { text, .. } => Some((r.page, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn texts_on(&self, page: usize) -> Vec<&str> {
        self.texts()
            .into_iter()
            .filter(|(p, _)| *p == page)
            .map(|(_, t)| t)
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|(_, t)| t.contains(needle))
    }

    /// Pages holding a text call that contains `needle`.
    pub fn pages_with_text(&self, needle: &str) -> Vec<usize> {
        let mut pages: Vec<usize> = self
            .texts()
            .into_iter()
            .filter(|(_, t)| t.contains(needle))
            .map(|(p, _)| p)
            .collect();
        pages.dedup();
        pages
    }

    pub fn filled_rects(&self, color: Color) -> Vec<(usize, Rect)> {
        self.ops
            .iter()
            .filter_map(|r| match r.op {
                Op::Rect { rect, paint, fill } if paint.fills() && fill == color => {
                    Some((r.page, rect))
                }
                _ => None,
            })
            .collect()
    }

    pub fn rounded_rects(&self) -> Vec<(usize, Rect)> {
        self.ops
            .iter()
            .filter_map(|r| match r.op {
                Op::RoundedRect { rect, .. } => Some((r.page, rect)),
                _ => None,
            })
            .collect()
    }

    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|r| matches!(r.op, Op::Circle { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        self.pages += 1;
        Ok(())
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn font(&self) -> Font {
        self.font
    }

    fn set_color(&mut self, target: ColorTarget, color: Color) {
        match target {
            ColorTarget::Fill => self.fill = color,
            ColorTarget::Stroke => self.stroke = color,
            ColorTarget::Text => self.text = color,
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, options: TextOptions) -> Result<(), RenderError> {
        let op = Op::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font,
            color: self.text,
            options,
        };
        self.record(op)
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let op = Op::Line {
            from,
            to,
            color: self.stroke,
            width: self.line_width,
        };
        self.record(op)
    }

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError> {
        let fill = self.fill;
        self.record(Op::Rect { rect, paint, fill })
    }

    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, paint: PaintMode) -> Result<(), RenderError> {
        let fill = self.fill;
        self.record(Op::RoundedRect {
            rect,
            radius,
            paint,
            fill,
        })
    }

    fn draw_circle(&mut self, center: Point, radius: f32, _paint: PaintMode) -> Result<(), RenderError> {
        self.record(Op::Circle { center, radius })
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(format!("{:?}", self.ops).into_bytes())
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 10, 0, 0).unwrap()
}

pub fn warrant(kind: WarrantKind) -> WarrantRecord {
    WarrantRecord::new("3f9a2c7e-81b4-4d0a-9e55-0c1d2b3a4f5e", kind, at(10, 1), "Sgt. Vega#4821", "Tony Marsh")
        .with_narrative(
            "Suspected storage of stolen goods.",
            "Three witnesses saw crates moved into the garage after the robbery on Grove Street.",
        )
}

/// `count` entries with unique dates whose charges wrap to two lines at the default width.
pub fn two_line_entries(count: usize) -> Vec<ArrestEntry> {
    (0..count)
        .map(|i| ArrestEntry::new(format!("D{:03}", i), "xxxxxxxxx ".repeat(12)))
        .collect()
}

pub fn criminal_record(entries: Vec<ArrestEntry>) -> CriminalRecord {
    CriminalRecord::new("Tony Marsh", "LS-55821").with_entries(entries)
}

/// Draws `warrant` with a default renderer and hands back the recorded surface.
pub fn record(warrant: &WarrantRecord) -> RecordingSurface {
    record_with(&RenderConfig::default(), warrant)
}

pub fn record_with(config: &RenderConfig, warrant: &WarrantRecord) -> RecordingSurface {
    let renderer = DocumentRenderer::new(config);
    let mut surface = RecordingSurface::new(renderer.geometry().page_size());
    renderer.draw(&mut surface, warrant).unwrap();
    surface
}
