pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use warrant_press::{WarrantPress, WarrantRecord};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single 1-based page
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render with the default configuration
pub fn generate_pdf(warrant: &WarrantRecord) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with(&WarrantPress::default(), warrant)
}

pub fn generate_pdf_with(
    press: &WarrantPress,
    warrant: &WarrantRecord,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = press.render(warrant)?;
    GeneratedPdf::from_bytes(bytes)
}
