//! Text extraction for uploaded documents.

use bytes::Bytes;

use crate::errors::AppError;
use crate::scoring::models::MediaKind;

/// Extracts normalized text from raw bytes of the given kind.
///
/// Text kinds never fail: invalid UTF-8 is replaced with U+FFFD. PDFs are
/// parsed page by page; a malformed document is a `DocumentParse` error.
/// PDF parsing is CPU-bound, so async callers should go through
/// [`extract_text_blocking`].
pub fn extract_text(bytes: &[u8], kind: MediaKind) -> Result<String, AppError> {
    match kind {
        MediaKind::PlainText | MediaKind::OctetStream => Ok(extract_plain_text(bytes)),
        MediaKind::Pdf => extract_pdf_text(bytes),
    }
}

/// Runs [`extract_text`] on the blocking pool. A panic inside the PDF library
/// is reported as a parse failure rather than tearing down the request task.
pub async fn extract_text_blocking(
    bytes: Bytes,
    kind: MediaKind,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes, kind))
        .await
        .map_err(|e| AppError::DocumentParse(format!("extractor aborted: {e}")))?
}

fn extract_plain_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::DocumentParse(e.to_string()))?;
    Ok(join_pages(pages))
}

/// Joins page texts in document order with newline separators, then trims.
fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fmt::Write as _;

    /// Builds a minimal single-page PDF that shows `text` in Helvetica.
    pub fn one_page_pdf(text: &str) -> Vec<u8> {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        let content = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            write!(pdf, "{} 0 obj\n{body}\nendobj\n", i + 1).unwrap();
        }

        let xref = pdf.len();
        write!(pdf, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).unwrap();
        for offset in offsets {
            write!(pdf, "{offset:010} 00000 n \n").unwrap();
        }
        write!(
            pdf,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            objects.len() + 1
        )
        .unwrap();
        pdf.into_bytes()
    }

    #[test]
    fn test_pdf_page_text_is_extracted() {
        let pdf = one_page_pdf("Jane Doe, Rust engineer");
        let text = extract_text(&pdf, MediaKind::Pdf).unwrap();
        assert_eq!(text, "Jane Doe, Rust engineer");
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = extract_text(b"  \n Senior Rust Engineer \t\n", MediaKind::PlainText).unwrap();
        assert_eq!(text, "Senior Rust Engineer");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let bytes = [b'R', b'u', 0xFF, b's', b't'];
        let text = extract_text(&bytes, MediaKind::OctetStream).unwrap();
        assert_eq!(text, "Ru\u{FFFD}st");
    }

    #[test]
    fn test_garbage_pdf_is_document_parse_error() {
        let err = extract_text(b"this is definitely not a pdf", MediaKind::Pdf).unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }

    #[test]
    fn test_join_pages_keeps_empty_pages_as_separators() {
        let pages = vec![
            "Page one".to_string(),
            String::new(),
            "Page three\n".to_string(),
        ];
        assert_eq!(join_pages(pages), "Page one\n\nPage three");
    }

    #[test]
    fn test_join_pages_trims_surrounding_whitespace() {
        let pages = vec!["\n\n  Jane Doe".to_string(), "Rust, Go  \n".to_string()];
        assert_eq!(join_pages(pages), "Jane Doe\nRust, Go");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
    }

    #[tokio::test]
    async fn test_blocking_extraction_plain_text() {
        let text = extract_text_blocking(
            Bytes::from_static(b" We are hiring a Rust developer. "),
            MediaKind::PlainText,
        )
        .await
        .unwrap();
        assert_eq!(text, "We are hiring a Rust developer.");
    }
}
