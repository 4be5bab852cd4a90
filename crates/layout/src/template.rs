//! Fixed, single-occurrence blocks of the first page.
//!
//! Every block takes the cursor by value and returns it advanced to the
//! baseline (or bottom edge) of the last thing it drew.

use crate::context::{
    BODY, BODY_BOLD, RenderContext, TextStyle, apply_style, draw_rule, draw_text, palette,
};
use crate::dates::long_date;
use warrant_render_core::{ColorTarget, DrawingSurface, Font, FontStyle, PaintMode, RenderError, TextOptions};
use warrant_types::{Cursor, Rect, WarrantRecord, display_name};

const JURISDICTION: TextStyle = TextStyle::new(Font::helvetica(FontStyle::Normal, 10.0), palette::MUTED);
const DEPARTMENT: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 16.0));
const SUB_DEPARTMENT: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 12.0));
const TITLE: TextStyle = TextStyle::ink(Font::times(FontStyle::Bold, 20.0));
const REFERENCE: TextStyle = TextStyle::new(Font::courier(FontStyle::Normal, 8.0), palette::MUTED);
const FIELD_LABEL: TextStyle = TextStyle::new(Font::helvetica(FontStyle::Bold, 9.0), palette::MUTED);

const INFO_ROW_SPACING: f32 = 18.0;
const INFO_LABEL_X: f32 = 12.0;
const INFO_VALUE_X: f32 = 110.0;
const NARRATIVE_LINE_HEIGHT: f32 = 14.0;
const SECTION_RULE_WIDTH: f32 = 40.0;

/// Jurisdiction, department and sub-department over a double rule.
pub(crate) fn draw_masthead<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
) -> Result<Cursor, RenderError> {
    let center = ctx.geometry.center_x();
    let labels = ctx.labels;

    draw_text(surface, JURISDICTION, &labels.jurisdiction, center, cursor.y, TextOptions::centered())?;
    let cursor = cursor.down(20.0);
    draw_text(surface, DEPARTMENT, &labels.department, center, cursor.y, TextOptions::centered())?;
    let cursor = cursor.down(18.0);
    draw_text(surface, SUB_DEPARTMENT, &labels.sub_department, center, cursor.y, TextOptions::centered())?;

    let cursor = cursor.down(10.0);
    draw_rule(surface, ctx.left(), ctx.right(), cursor.y, 1.5, palette::RULE)?;
    let cursor = cursor.down(3.0);
    draw_rule(surface, ctx.left(), ctx.right(), cursor.y, 0.5, palette::RULE)?;
    Ok(cursor)
}

pub(crate) fn draw_title<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    warrant: &WarrantRecord,
) -> Result<Cursor, RenderError> {
    let cursor = cursor.down(32.0);
    let title = ctx.labels.title(warrant.kind);
    draw_text(surface, TITLE, title, ctx.geometry.center_x(), cursor.y, TextOptions::centered())?;
    Ok(cursor)
}

/// `REF. <SHORTID> | <creation date>` in small monospace.
pub(crate) fn draw_reference_line<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    warrant: &WarrantRecord,
) -> Result<Cursor, RenderError> {
    let cursor = cursor.down(16.0);
    let line = format!(
        "{} {} | {}",
        ctx.labels.reference_prefix,
        ctx.short_id,
        long_date(&warrant.created_at, ctx.locale)
    );
    draw_text(surface, REFERENCE, &line, ctx.geometry.center_x(), cursor.y, TextOptions::centered())?;
    Ok(cursor)
}

/// Label/value pairs in a filled box; returns the cursor at the box's bottom edge.
pub(crate) fn draw_info_box<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    warrant: &WarrantRecord,
) -> Result<Cursor, RenderError> {
    let labels = ctx.labels;
    let location = warrant.displayed_location();
    let top = cursor.y + 14.0;
    let height = ctx.geometry.info_box_height(location.is_some());
    let rect = Rect::new(ctx.left(), top, ctx.geometry.content_width(), height);

    surface.set_color(ColorTarget::Fill, palette::BOX_FILL);
    surface.set_color(ColorTarget::Stroke, palette::BOX_EDGE);
    surface.set_line_width(0.5);
    surface.draw_rounded_rect(rect, 6.0, PaintMode::FillStroke)?;

    let created = long_date(&warrant.created_at, ctx.locale);
    let mut rows = vec![
        (&labels.date_label, created.as_str()),
        (&labels.officer_label, display_name(&warrant.officer_name)),
        (&labels.target_label, warrant.target_name.as_str()),
    ];
    if let Some(location) = location {
        rows.push((&labels.location_label, location));
    }

    let mut baseline = top + 22.0;
    for (label, value) in rows {
        draw_text(surface, FIELD_LABEL, label, rect.x + INFO_LABEL_X, baseline, TextOptions::left())?;
        draw_text(surface, BODY, value, rect.x + INFO_VALUE_X, baseline, TextOptions::left())?;
        baseline += INFO_ROW_SPACING;
    }

    Ok(cursor.with_y(rect.bottom()))
}

/// A short rule, a bold heading and word-wrapped body text.
pub(crate) fn draw_narrative_section<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    heading: &str,
    body: &str,
) -> Result<Cursor, RenderError> {
    let left = ctx.left();
    let top = cursor.y + 20.0;
    draw_rule(surface, left, left + SECTION_RULE_WIDTH, top, 1.0, palette::RULE)?;
    draw_text(surface, BODY_BOLD, heading, left, top + 14.0, TextOptions::left())?;

    apply_style(surface, BODY);
    let lines = surface.wrap_text(body, ctx.geometry.narrative_width());
    let x = left + ctx.geometry.narrative_inset;
    let mut baseline = top + 30.0;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            baseline += NARRATIVE_LINE_HEIGHT;
        }
        surface.draw_text(line, x, baseline, TextOptions::left())?;
    }
    Ok(cursor.with_y(baseline))
}
