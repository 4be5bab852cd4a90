//! Criminal-history table flowing across continuation pages.
//!
//! Rows are measured before they are drawn: a row that would cross the
//! bottom threshold moves whole to a fresh page with its own border and
//! header bar, so no entry is ever split. The summary line shares the last
//! row page because the threshold keeps room for it.

use crate::chrome::{draw_footer, start_page};
use crate::context::{RenderContext, TextStyle, apply_style, draw_rule, draw_text, palette};
use warrant_render_core::{ColorTarget, DrawingSurface, Font, FontStyle, PaintMode, RenderError, TextOptions};
use warrant_types::{ArrestEntry, CriminalRecord, Cursor, Rect};

const TITLE: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 16.0));
const SUBTITLE: TextStyle = TextStyle::new(Font::times(FontStyle::Italic, 10.0), palette::MUTED);
const HEADER: TextStyle = TextStyle::new(Font::helvetica(FontStyle::Bold, 9.0), palette::HEADER_TEXT);
const DATE: TextStyle = TextStyle::ink(Font::courier(FontStyle::Normal, 9.0));
const CHARGES: TextStyle = TextStyle::ink(Font::times(FontStyle::Normal, 9.0));
const SUMMARY: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 10.0));

const HEADER_BAR_HEIGHT: f32 = 20.0;
const HEADER_BAR_GAP: f32 = 8.0;

/// Outcome of one ledger flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Pages started by the ledger, not counting the first page.
    pub pages: usize,
    pub rows: usize,
}

pub(crate) struct LedgerFlow<'a, 'c> {
    ctx: &'a RenderContext<'c>,
}

impl<'a, 'c> LedgerFlow<'a, 'c> {
    pub fn new(ctx: &'a RenderContext<'c>) -> Self {
        Self { ctx }
    }

    /// Renders every entry of `record`. A record without entries is a no-op.
    pub fn render<S: DrawingSurface>(
        &self,
        surface: &mut S,
        record: &CriminalRecord,
    ) -> Result<LedgerSummary, RenderError> {
        if record.entries.is_empty() {
            return Ok(LedgerSummary::default());
        }
        let geometry = self.ctx.geometry;
        let pages_before = surface.page_count();

        start_page(surface, self.ctx)?;
        let cursor = self.draw_heading(surface, record)?;
        let mut cursor = self.draw_header_bar(surface, cursor)?;
        let mut rows_on_page = 0usize;

        for (index, entry) in record.entries.iter().enumerate() {
            apply_style(surface, CHARGES);
            let lines = surface.wrap_text(&entry.charges, geometry.charges_width());
            let needed = geometry.row_height.max(lines.len() as f32 * geometry.line_height);

            // An oversized row on an empty page is drawn anyway rather than looping.
            if rows_on_page > 0 && cursor.y + needed > geometry.ledger_threshold() {
                draw_footer(surface, self.ctx)?;
                start_page(surface, self.ctx)?;
                cursor = self.draw_header_bar(surface, Cursor::at(self.ctx.left(), geometry.top_offset))?;
                rows_on_page = 0;
            }

            log::trace!(
                "Ledger row {} on page {}: {} line(s), {:.1}pt",
                index,
                surface.page_count(),
                lines.len(),
                needed
            );
            cursor = self.draw_row(surface, cursor, index, entry, &lines, needed)?;
            rows_on_page += 1;
        }

        let summary = format!("{}: {}", self.ctx.labels.total_entries, record.entries.len());
        draw_text(
            surface,
            SUMMARY,
            &summary,
            self.ctx.left() + geometry.date_column,
            cursor.y + geometry.line_height,
            TextOptions::left(),
        )?;
        draw_footer(surface, self.ctx)?;

        let result = LedgerSummary {
            pages: surface.page_count() - pages_before,
            rows: record.entries.len(),
        };
        log::debug!(
            "Ledger of warrant {}: {} row(s) over {} page(s)",
            self.ctx.short_id,
            result.rows,
            result.pages
        );
        Ok(result)
    }

    /// Section title, subject reference and rule at the top of the first ledger page.
    fn draw_heading<S: DrawingSurface>(
        &self,
        surface: &mut S,
        record: &CriminalRecord,
    ) -> Result<Cursor, RenderError> {
        let ctx = self.ctx;
        let center = ctx.geometry.center_x();
        let cursor = Cursor::at(ctx.left(), ctx.geometry.top_offset + 8.0);
        draw_text(surface, TITLE, &ctx.labels.ledger_title, center, cursor.y, TextOptions::centered())?;

        let cursor = cursor.down(18.0);
        let subtitle = format!(
            "{} - {} {}",
            record.subject_name, ctx.labels.ledger_reference, record.reference_id
        );
        draw_text(surface, SUBTITLE, &subtitle, center, cursor.y, TextOptions::centered())?;

        let cursor = cursor.down(10.0);
        draw_rule(surface, ctx.left(), ctx.right(), cursor.y, 0.5, palette::RULE)?;
        Ok(cursor.down(20.0))
    }

    /// Filled bar with the column labels; returns the top of the first row.
    fn draw_header_bar<S: DrawingSurface>(
        &self,
        surface: &mut S,
        cursor: Cursor,
    ) -> Result<Cursor, RenderError> {
        let ctx = self.ctx;
        let left = ctx.left();
        let bar = Rect::new(left, cursor.y, ctx.geometry.content_width(), HEADER_BAR_HEIGHT);
        surface.set_color(ColorTarget::Fill, palette::HEADER_FILL);
        surface.draw_rect(bar, PaintMode::Fill)?;

        let baseline = bar.y + 14.0;
        draw_text(
            surface,
            HEADER,
            &ctx.labels.date_column,
            left + ctx.geometry.date_column,
            baseline,
            TextOptions::left(),
        )?;
        draw_text(
            surface,
            HEADER,
            &ctx.labels.charges_column,
            left + ctx.geometry.charges_column,
            baseline,
            TextOptions::left(),
        )?;
        Ok(cursor.with_y(bar.bottom() + HEADER_BAR_GAP))
    }

    fn draw_row<S: DrawingSurface>(
        &self,
        surface: &mut S,
        cursor: Cursor,
        index: usize,
        entry: &ArrestEntry,
        lines: &[String],
        height: f32,
    ) -> Result<Cursor, RenderError> {
        let geometry = self.ctx.geometry;
        let left = self.ctx.left();

        if index % 2 == 0 {
            surface.set_color(ColorTarget::Fill, palette::STRIPE);
            surface.draw_rect(
                Rect::new(left, cursor.y, geometry.content_width(), height),
                PaintMode::Fill,
            )?;
        }

        let baseline = cursor.y + geometry.line_height;
        draw_text(surface, DATE, &entry.date, left + geometry.date_column, baseline, TextOptions::left())?;

        apply_style(surface, CHARGES);
        let x = left + geometry.charges_column;
        for (i, line) in lines.iter().enumerate() {
            surface.draw_text(line, x, baseline + i as f32 * geometry.line_height, TextOptions::left())?;
        }

        Ok(cursor.down(height + geometry.row_gap))
    }
}
