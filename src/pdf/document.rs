use crate::error::ExtractError;
use crate::page_range::PageSpan;
use lopdf::{Document, ObjectId};
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let doc = Document::load(path).map_err(|source| ExtractError::SourceDocument {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        self.doc.get_pages().into_iter().collect()
    }

    /// Build a new document holding only the pages in `span`, in source order.
    ///
    /// The source is cloned and every other page deleted, so shared resources
    /// keep working. Objects no longer reachable from the trailer are dropped.
    pub fn extract_span(&self, span: &PageSpan) -> Document {
        let mut new_doc = self.doc.clone();
        let keep = span.page_numbers();

        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|num| !keep.contains(num))
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        new_doc.prune_objects();

        new_doc
    }

    /// Serialize to bytes. `path` only labels the error.
    pub fn render(doc: &mut Document, path: &Path) -> Result<Vec<u8>, ExtractError> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExtractError::Render {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(bytes)
    }

    /// Serialize and write to a file, replacing any existing one
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<(), ExtractError> {
        let path = path.as_ref();
        let bytes = Self::render(doc, path)?;
        std::fs::write(path, bytes).map_err(|source| ExtractError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::{page_labels, sample_pdf};
    use tempfile::TempDir;

    fn open_sample(pages: u32) -> (TempDir, PdfDocument) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("source.pdf");
        sample_pdf(pages).save(&path).unwrap();
        let doc = PdfDocument::open(&path).unwrap();
        (dir, doc)
    }

    #[test]
    fn test_page_count() {
        let (_dir, doc) = open_sample(7);
        assert_eq!(doc.page_count(), 7);
        let numbers: Vec<u32> = doc.page_ids().into_iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_extract_span_keeps_order() {
        let (_dir, doc) = open_sample(10);
        let span = PageSpan::resolve(3, 5, 10).unwrap();
        let extracted = doc.extract_span(&span);
        assert_eq!(page_labels(&extracted), vec!["Page 3", "Page 4", "Page 5"]);
    }

    #[test]
    fn test_extract_span_leaves_source_untouched() {
        let (_dir, doc) = open_sample(4);
        let span = PageSpan::resolve(2, 2, 4).unwrap();
        let _ = doc.extract_span(&span);
        assert_eq!(doc.page_count(), 4);
    }

    #[test]
    fn test_extract_empty_span() {
        let (dir, doc) = open_sample(3);
        let span = PageSpan::resolve(3, 1, 3).unwrap();
        let mut extracted = doc.extract_span(&span);

        let out = dir.path().join("empty.pdf");
        PdfDocument::save(&mut extracted, &out).unwrap();
        let reopened = PdfDocument::open(&out).unwrap();
        assert_eq!(reopened.page_count(), 0);
    }

    #[test]
    fn test_save_round_trip() {
        let (dir, doc) = open_sample(5);
        let span = PageSpan::resolve(4, 9, 5).unwrap();
        let mut extracted = doc.extract_span(&span);

        let out = dir.path().join("out.pdf");
        PdfDocument::save(&mut extracted, &out).unwrap();
        let reopened = PdfDocument::open(&out).unwrap();
        assert_eq!(page_labels(&reopened.doc), vec!["Page 4", "Page 5"]);
    }

    #[test]
    fn test_open_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        assert!(matches!(
            PdfDocument::open(&path),
            Err(ExtractError::SourceDocument { .. })
        ));
    }

    #[test]
    fn test_open_missing() {
        assert!(matches!(
            PdfDocument::open("/nonexistent/source.pdf"),
            Err(ExtractError::SourceDocument { .. })
        ));
    }
}
