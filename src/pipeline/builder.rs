// src/pipeline/builder.rs
use super::press::WarrantPress;
use crate::error::PipelineError;
use std::fs;
use std::path::Path;
use warrant_layout::{Locale, RenderConfig};

/// A builder for creating a [`WarrantPress`].
#[derive(Debug, Clone, Default)]
pub struct WarrantPressBuilder {
    config: RenderConfig,
    locale: Option<Locale>,
}

impl WarrantPressBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a JSON render configuration. Missing keys keep their defaults.
    pub fn with_config_json(self, json: &str) -> Result<Self, PipelineError> {
        let config = serde_json::from_str(json)
            .map_err(|e| PipelineError::Config(format!("render configuration: {}", e)))?;
        Ok(self.with_config(config))
    }

    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        log::debug!("Loading render configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        self.with_config_json(&json).map_err(|e| match e {
            PipelineError::Config(msg) => PipelineError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Overrides the locale of whatever configuration is set, before or after this call.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn build(self) -> Result<WarrantPress, PipelineError> {
        let mut config = self.config;
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        let geometry = &config.geometry;
        if geometry.page_width <= 0.0 || geometry.page_height <= 0.0 {
            return Err(PipelineError::Config(format!(
                "page size must be positive, got {}x{}",
                geometry.page_width, geometry.page_height
            )));
        }
        if geometry.content_width() <= geometry.charges_column + geometry.date_column {
            return Err(PipelineError::Config(
                "margins leave no room for the ledger charges column".to_string(),
            ));
        }
        if geometry.line_height <= 0.0 || geometry.row_height <= 0.0 {
            return Err(PipelineError::Config(
                "ledger row and line heights must be positive".to_string(),
            ));
        }
        Ok(WarrantPress::new(config))
    }
}
