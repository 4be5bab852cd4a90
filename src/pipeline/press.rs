// src/pipeline/press.rs
use crate::error::PipelineError;
use crate::executor;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use warrant_layout::{DocumentRenderer, RenderConfig};
use warrant_render_lopdf::LopdfSurface;
use warrant_types::WarrantRecord;

/// Renders warrant records to PDF bytes.
///
/// Each render gets its own [`LopdfSurface`]; the press itself only holds
/// configuration and can be shared across threads.
#[derive(Debug, Clone)]
pub struct WarrantPress {
    config: RenderConfig,
    renderer: DocumentRenderer,
}

impl Default for WarrantPress {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl WarrantPress {
    pub(crate) fn new(config: RenderConfig) -> Self {
        let renderer = DocumentRenderer::new(&config);
        Self { config, renderer }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, warrant: &WarrantRecord) -> Result<Vec<u8>, PipelineError> {
        let start = Instant::now();
        let surface = LopdfSurface::new(self.renderer.geometry().page_size());
        let bytes = self.renderer.render(surface, warrant)?;
        log::debug!(
            "Warrant {} rendered to {} bytes in {:.2?}",
            warrant.id,
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes)
    }

    /// Renders `warrant` and writes it to `path`. Nothing is written if rendering fails.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        warrant: &WarrantRecord,
        path: P,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let bytes = self.render(warrant)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }

    /// Renders every record independently; results are in input order.
    pub fn render_batch(&self, warrants: &[WarrantRecord]) -> Vec<Result<Vec<u8>, PipelineError>> {
        log::info!(
            "Rendering batch of {} warrant(s) on {} worker(s)",
            warrants.len(),
            executor::parallelism()
        );
        executor::map_ordered(warrants, |warrant| self.render(warrant))
    }
}

/// `warrant-<first 8 id chars, lowercase>.pdf`.
pub fn suggested_file_name(warrant: &WarrantRecord) -> String {
    format!("warrant-{}.pdf", warrant.id.short_ref().to_lowercase())
}

/// Renders with the default English configuration.
pub fn render_warrant(warrant: &WarrantRecord) -> Result<Vec<u8>, PipelineError> {
    WarrantPress::default().render(warrant)
}

/// Reads one warrant record from a JSON file.
pub fn read_record<P: AsRef<Path>>(path: P) -> Result<WarrantRecord, PipelineError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
