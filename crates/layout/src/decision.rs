//! The judge's decision, drawn at a fixed position on the first page.

use crate::context::{
    BODY, BODY_BOLD, RenderContext, TextStyle, apply_style, draw_rule, draw_text, palette,
};
use crate::dates::long_date;
use warrant_render_core::{ColorTarget, DrawingSurface, Font, FontStyle, PaintMode, RenderError, TextOptions};
use warrant_types::{Color, Cursor, Decision, Rect, display_name};

const HEADING: TextStyle = TextStyle::new(Font::helvetica(FontStyle::Bold, 10.0), palette::MUTED);
const PENDING: TextStyle = TextStyle::new(Font::times(FontStyle::Italic, 11.0), palette::MUTED);
const MARKER_FONT: Font = Font::helvetica(FontStyle::Bold, 14.0);
const STAMP_FONT: Font = Font::courier(FontStyle::Bold, 16.0);

const STAMP_WIDTH: f32 = 140.0;
const STAMP_HEIGHT: f32 = 64.0;
const STAMP_ROTATION: f32 = 15.0;
const REASON_OFFSET: f32 = 80.0;
const LINE_HEIGHT: f32 = 14.0;

/// Draws the decision rule, heading and the variant for `decision`.
///
/// Lines whose data the record lacks are left out; nothing here fails on
/// content.
pub(crate) fn draw_decision_block<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    decision: Decision<'_>,
) -> Result<Cursor, RenderError> {
    let top = ctx.geometry.decision_top;
    let labels = ctx.labels;
    draw_rule(surface, ctx.left(), ctx.right(), top, 1.0, palette::RULE)?;
    draw_text(surface, HEADING, &labels.decision_heading, ctx.left(), top + 16.0, TextOptions::left())?;

    let cursor = Cursor::at(ctx.left(), top + 16.0);
    match decision {
        Decision::Pending => {
            let cursor = cursor.down(22.0);
            draw_text(surface, PENDING, &labels.pending_marker, cursor.x, cursor.y, TextOptions::left())?;
            Ok(cursor)
        }
        Decision::Approved { judge_name, approved_at } => {
            let cursor = draw_marker(surface, cursor, &labels.approved_marker, palette::APPROVED)?;
            let cursor = draw_judge_line(surface, ctx, cursor, &labels.approved_by, judge_name, "approved")?;
            let cursor = cursor.down(16.0);
            let date = format!("{}: {}", labels.approval_date, long_date(&approved_at, ctx.locale));
            draw_text(surface, BODY, &date, cursor.x, cursor.y, TextOptions::left())?;
            draw_stamp(surface, ctx, &labels.approved_stamp)?;
            Ok(cursor)
        }
        Decision::Rejected { judge_name, reason } => {
            let cursor = draw_marker(surface, cursor, &labels.rejected_marker, palette::REJECTED)?;
            let cursor = draw_judge_line(surface, ctx, cursor, &labels.rejected_by, judge_name, "rejected")?;
            match reason.map(str::trim).filter(|r| !r.is_empty()) {
                Some(reason) => draw_rejection_reason(surface, ctx, cursor, reason),
                None => {
                    log::debug!("Omitting rejection reason of warrant {}: none given", ctx.short_id);
                    Ok(cursor)
                }
            }
        }
        Decision::Cancelled { judge_name } => {
            let cursor = draw_marker(surface, cursor, &labels.cancelled_marker, palette::CANCELLED)?;
            draw_judge_line(surface, ctx, cursor, &labels.cancelled_by, judge_name, "cancelled")
        }
    }
}

fn draw_marker<S: DrawingSurface>(
    surface: &mut S,
    cursor: Cursor,
    marker: &str,
    color: Color,
) -> Result<Cursor, RenderError> {
    let cursor = cursor.down(22.0);
    draw_text(surface, TextStyle::new(MARKER_FONT, color), marker, cursor.x, cursor.y, TextOptions::left())?;
    Ok(cursor)
}

/// `<prefix>: <judge>`; the cursor still advances when the name is absent.
fn draw_judge_line<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    prefix: &str,
    judge_name: Option<&str>,
    variant: &str,
) -> Result<Cursor, RenderError> {
    let cursor = cursor.down(18.0);
    match judge_name.map(display_name).filter(|name| !name.is_empty()) {
        Some(name) => {
            let line = format!("{}: {}", prefix, name);
            draw_text(surface, BODY, &line, cursor.x, cursor.y, TextOptions::left())?;
        }
        None => log::debug!(
            "Omitting judge line of {} warrant {}: no judge name",
            variant,
            ctx.short_id
        ),
    }
    Ok(cursor)
}

fn draw_rejection_reason<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    cursor: Cursor,
    reason: &str,
) -> Result<Cursor, RenderError> {
    let cursor = cursor.down(18.0);
    let label = format!("{}:", ctx.labels.rejection_reason);
    draw_text(surface, BODY_BOLD, &label, cursor.x, cursor.y, TextOptions::left())?;

    apply_style(surface, BODY);
    let lines = surface.wrap_text(reason, ctx.geometry.content_width() - REASON_OFFSET);
    let x = cursor.x + REASON_OFFSET;
    let mut baseline = cursor.y;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            baseline += LINE_HEIGHT;
        }
        surface.draw_text(line, x, baseline, TextOptions::left())?;
    }
    Ok(cursor.with_y(baseline))
}

/// Rotated stamp word in a rounded box with a concentric ring, right-aligned.
fn draw_stamp<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
    word: &str,
) -> Result<(), RenderError> {
    let rect = Rect::new(
        ctx.right() - STAMP_WIDTH,
        ctx.geometry.decision_top + 26.0,
        STAMP_WIDTH,
        STAMP_HEIGHT,
    );
    let center = rect.center();

    surface.set_color(ColorTarget::Stroke, palette::APPROVED);
    surface.set_line_width(2.0);
    surface.draw_rounded_rect(rect, 8.0, PaintMode::Stroke)?;
    surface.set_line_width(1.0);
    surface.draw_circle(center, STAMP_HEIGHT / 2.0 - 4.0, PaintMode::Stroke)?;

    let style = TextStyle::new(STAMP_FONT, palette::APPROVED);
    draw_text(
        surface,
        style,
        word,
        center.x,
        center.y + 5.0,
        TextOptions::centered().rotated(STAMP_ROTATION),
    )
}
