use crate::chrome::{draw_footer, start_page};
use crate::config::{PageGeometry, RenderConfig};
use crate::context::RenderContext;
use crate::decision::draw_decision_block;
use crate::labels::{Labels, Locale};
use crate::ledger::{LedgerFlow, LedgerSummary};
use crate::template::{
    draw_info_box, draw_masthead, draw_narrative_section, draw_reference_line, draw_title,
};
use warrant_render_core::{DrawingSurface, RenderError};
use warrant_types::{Cursor, WarrantRecord};

/// Lays out warrant documents onto any [`DrawingSurface`].
///
/// The renderer holds only configuration, so one instance can serve any
/// number of renders, including concurrent ones on separate surfaces.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    geometry: PageGeometry,
    labels: Labels,
    locale: Locale,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl DocumentRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            geometry: config.geometry,
            labels: config.resolved_labels(),
            locale: config.locale,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Draws `warrant` onto `surface` and returns the finished document.
    ///
    /// Fails only when the surface does; missing optional fields are skipped.
    pub fn render<S: DrawingSurface>(
        &self,
        mut surface: S,
        warrant: &WarrantRecord,
    ) -> Result<Vec<u8>, RenderError> {
        self.draw(&mut surface, warrant)?;
        surface.finish()
    }

    /// Draws every page of `warrant` without finishing the surface.
    pub fn draw<S: DrawingSurface>(
        &self,
        surface: &mut S,
        warrant: &WarrantRecord,
    ) -> Result<LedgerSummary, RenderError> {
        let ctx = RenderContext {
            geometry: &self.geometry,
            labels: &self.labels,
            locale: self.locale,
            short_id: warrant.id.short_ref(),
        };
        surface.set_title(&format!("{} {}", self.labels.title(warrant.kind), ctx.short_id));

        start_page(surface, &ctx)?;
        let cursor = Cursor::at(ctx.left(), self.geometry.top_offset);
        let cursor = draw_masthead(surface, &ctx, cursor)?;
        let cursor = draw_title(surface, &ctx, cursor, warrant)?;
        let cursor = draw_reference_line(surface, &ctx, cursor, warrant)?;
        let cursor = draw_info_box(surface, &ctx, cursor, warrant)?;
        let cursor =
            draw_narrative_section(surface, &ctx, cursor, &self.labels.reason_heading, &warrant.reason)?;
        let cursor = draw_narrative_section(
            surface,
            &ctx,
            cursor,
            &self.labels.details_heading,
            &warrant.details,
        )?;
        if cursor.y > self.geometry.decision_top {
            log::warn!(
                "Narrative of warrant {} reaches y={:.1}, past the decision block at y={:.1}; overdrawing",
                ctx.short_id,
                cursor.y,
                self.geometry.decision_top
            );
        }

        draw_decision_block(surface, &ctx, warrant.decision())?;
        draw_footer(surface, &ctx)?;

        let summary = match warrant.ledger() {
            Some(record) => LedgerFlow::new(&ctx).render(surface, record)?,
            None => LedgerSummary::default(),
        };
        log::debug!(
            "Rendered warrant {} ({:?}, {:?}) on {} page(s)",
            ctx.short_id,
            warrant.kind,
            warrant.status,
            surface.page_count()
        );
        Ok(summary)
    }
}
