//! Decoration repeated on every page: the double border and the footer bar.

use crate::context::{draw_rule, draw_text, palette, RenderContext, TextStyle};
use warrant_render_core::{ColorTarget, DrawingSurface, Font, FontStyle, PaintMode, RenderError, TextOptions};
use warrant_types::Rect;

const FOOTER: TextStyle = TextStyle::new(Font::courier(FontStyle::Normal, 7.0), palette::MUTED);

/// Starts a page and draws its border.
pub(crate) fn start_page<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    surface.new_page()?;
    log::debug!("Starting page {} of warrant {}", surface.page_count(), ctx.short_id);
    draw_page_border(surface, ctx)
}

pub(crate) fn draw_page_border<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    let page = Rect::new(0.0, 0.0, ctx.geometry.page_width, ctx.geometry.page_height);
    surface.set_color(ColorTarget::Stroke, palette::RULE);

    surface.set_line_width(2.0);
    surface.draw_rect(page.inset(ctx.geometry.border_outer_inset), PaintMode::Stroke)?;
    surface.set_line_width(0.5);
    surface.draw_rect(page.inset(ctx.geometry.border_inner_inset), PaintMode::Stroke)
}

/// Footer rule and attribution for the current page.
pub(crate) fn draw_footer<S: DrawingSurface>(
    surface: &mut S,
    ctx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    let geometry = ctx.geometry;
    draw_rule(
        surface,
        ctx.left(),
        ctx.right(),
        geometry.footer_rule_y(),
        0.5,
        palette::BOX_EDGE,
    )?;
    let text = ctx.labels.footer_text(&ctx.short_id, surface.page_count());
    draw_text(
        surface,
        FOOTER,
        &text,
        geometry.center_x(),
        geometry.footer_baseline_y(),
        TextOptions::centered(),
    )
}
