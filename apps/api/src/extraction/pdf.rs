use crate::extraction::ExtractionError;

/// Pulls the text layer out of a PDF. Scanned PDFs without a text layer come back empty.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractionError::Pdf(e.to_string()))
}
