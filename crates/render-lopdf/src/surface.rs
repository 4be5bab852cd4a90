use crate::page::{PageContext, TextRun};
use crate::{to_win_ansi, StreamingPdfWriter};
use lopdf::{dictionary, Dictionary};
use std::collections::BTreeMap;
use std::io::Cursor;
use warrant_render_core::utils::align_offset;
use warrant_render_core::{ColorTarget, DrawingSurface, Font, PaintMode, RenderError, TextOptions};
use warrant_types::{Color, Point, Rect, Size};

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = "warrant-press";

/// A [`DrawingSurface`] that produces a PDF document in memory.
///
/// Pages are kept as lopdf content streams until [`finish`] serializes the
/// whole document. Fonts are the standard 14 faces, registered as resources
/// in the order they are first used.
///
/// [`finish`]: DrawingSurface::finish
pub struct LopdfSurface {
    page_size: Size,
    title: Option<String>,
    pages: Vec<PageContext>,
    font: Font,
    fill_color: Color,
    stroke_color: Color,
    text_color: Color,
    line_width: f32,
    font_map: BTreeMap<&'static str, String>,
}

impl LopdfSurface {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            title: None,
            pages: Vec::new(),
            font: Font::default(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            text_color: Color::BLACK,
            line_width: 1.0,
            font_map: BTreeMap::new(),
        }
    }

    /// An A4 portrait surface, 595 × 842 points.
    pub fn a4() -> Self {
        Self::new(Size::new(595.0, 842.0))
    }

    fn current_page(&mut self) -> Result<&mut PageContext, RenderError> {
        self.pages
            .last_mut()
            .ok_or_else(|| RenderError::Surface("no page has been started".to_string()))
    }

    fn font_resource(&mut self, font: &Font) -> String {
        let next = self.font_map.len() + 1;
        self.font_map
            .entry(font.base_font_name())
            .or_insert_with(|| format!("F{}", next))
            .clone()
    }

    /// Applies the paint colors and line width a shape needs, then returns its page.
    fn prepare_shape(&mut self, paint: PaintMode) -> Result<&mut PageContext, RenderError> {
        let (fill, stroke, width) = (self.fill_color, self.stroke_color, self.line_width);
        let page = self.current_page()?;
        if paint.fills() {
            page.set_fill_color(fill);
        }
        if paint.strokes() {
            page.set_stroke_color(stroke);
            page.set_line_width(width);
        }
        Ok(page)
    }

    fn font_dictionary(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (base_font, resource) in &self.font_map {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base_font,
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(resource.as_bytes().to_vec(), font);
        }
        fonts
    }
}

impl DrawingSurface for LopdfSurface {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        self.pages.push(PageContext::new(self.page_size.height));
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
            ColorTarget::Fill => self.fill_color = color,
            ColorTarget::Stroke => self.stroke_color = color,
            ColorTarget::Text => self.text_color = color,
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        options: TextOptions,
    ) -> Result<(), RenderError> {
        if text.is_empty() {
            // Still a fault when there is nowhere to draw.
            self.current_page()?;
            return Ok(());
        }
        let font = self.font;
        let offset = align_offset(options.align, self.measure_text(text));
        let resource = self.font_resource(&font);
        let color = self.text_color;
        self.current_page()?.show_text(TextRun {
            font_resource: &resource,
            font_size: font.size,
            color,
            bytes: to_win_ansi(text),
            origin: Point::new(x, y),
            offset,
            rotation: options.rotation,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        self.prepare_shape(PaintMode::Stroke)?.line(from, to);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, paint: PaintMode) -> Result<(), RenderError> {
        self.prepare_shape(paint)?.rect(rect, paint);
        Ok(())
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: PaintMode,
    ) -> Result<(), RenderError> {
        self.prepare_shape(paint)?.rounded_rect(rect, radius, paint);
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f32,
        paint: PaintMode,
    ) -> Result<(), RenderError> {
        self.prepare_shape(paint)?.circle(center, radius, paint);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let font_dict = self.font_dictionary();
        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), PDF_VERSION, font_dict)?;

        for page in self.pages {
            let content_id = writer.buffer_content_stream(page.finish())?;
            writer.add_page(content_id, self.page_size);
        }
        writer.set_info(self.title.as_deref().unwrap_or_default(), PRODUCER);

        log::debug!(
            "Serializing PDF: {} page(s), {} font resource(s)",
            writer.page_count(),
            self.font_map.len()
        );
        Ok(writer.finish()?.into_inner())
    }
}
