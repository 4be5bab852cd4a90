//! Render configuration: locale, label overrides and page geometry.

use crate::labels::{LabelOverrides, Labels, Locale};
use serde::{Deserialize, Serialize};
use warrant_types::Size;

/// Fixed layout constants, in points. Defaults describe A4 portrait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub border_outer_inset: f32,
    pub border_inner_inset: f32,
    /// Baseline of the first masthead line.
    pub top_offset: f32,
    pub narrative_inset: f32,
    /// Absolute y of the decision block rule.
    pub decision_top: f32,
    /// Distance of the footer rule above the bottom edge.
    pub footer_rule_offset: f32,
    /// Distance of the footer baseline above the bottom edge.
    pub footer_baseline_offset: f32,
    /// Distance above the bottom edge that ledger rows may not cross.
    pub ledger_bottom_offset: f32,
    pub date_column: f32,
    pub charges_column: f32,
    pub row_height: f32,
    pub line_height: f32,
    pub row_gap: f32,
    pub info_box_height: f32,
    pub info_box_height_with_location: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 56.0,
            border_outer_inset: 28.0,
            border_inner_inset: 32.0,
            top_offset: 72.0,
            narrative_inset: 10.0,
            decision_top: 610.0,
            footer_rule_offset: 52.0,
            footer_baseline_offset: 40.0,
            ledger_bottom_offset: 84.0,
            date_column: 8.0,
            charges_column: 96.0,
            row_height: 18.0,
            line_height: 12.0,
            row_gap: 4.0,
            info_box_height: 72.0,
            info_box_height_with_location: 90.0,
        }
    }
}

impl PageGeometry {
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_right(&self) -> f32 {
        self.page_width - self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }

    pub fn narrative_width(&self) -> f32 {
        self.content_width() - self.narrative_inset
    }

    pub fn charges_width(&self) -> f32 {
        self.content_width() - self.charges_column - self.date_column
    }

    pub fn ledger_threshold(&self) -> f32 {
        self.page_height - self.ledger_bottom_offset
    }

    pub fn footer_rule_y(&self) -> f32 {
        self.page_height - self.footer_rule_offset
    }

    pub fn footer_baseline_y(&self) -> f32 {
        self.page_height - self.footer_baseline_offset
    }

    pub fn info_box_height(&self, with_location: bool) -> f32 {
        if with_location {
            self.info_box_height_with_location
        } else {
            self.info_box_height
        }
    }
}

/// Everything that shapes a rendered warrant besides the record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub locale: Locale,
    pub labels: LabelOverrides,
    pub geometry: PageGeometry,
}

impl RenderConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The locale's labels with the configured overrides applied.
    pub fn resolved_labels(&self) -> Labels {
        self.locale.labels().with_overrides(&self.labels)
    }
}
