use lopdf::Document as LopdfDocument;
use playbook::{generate_playbook, ContentPools, PipelineError};

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

    /// Extract all text content from the PDF
    pub fn extract_text(&self) -> String {
        let mut text = String::new();
        let pages = self.doc.get_pages();
        for page_num in 1..=pages.len() {
            if let Ok(page_text) = self.doc.extract_text(&[page_num as u32]) {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
        text
    }

    /// Extract the text of a single 1-indexed page
    pub fn extract_page_text(&self, page_num: u32) -> String {
        self.doc.extract_text(&[page_num]).unwrap_or_default()
    }
}

/// Generate a playbook with the built-in pools and parse it back
pub fn generate(total_pages: usize) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generate_bytes(total_pages)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Generate a playbook with the built-in pools, returning the raw bytes
pub fn generate_bytes(total_pages: usize) -> Result<Vec<u8>, PipelineError> {
    generate_playbook(total_pages, &ContentPools::default(), Vec::new())
}
