use crate::error::{ExtractError, InputKind};
use crate::manifest::read_manifest;
use crate::page_range::PageSpan;
use crate::pdf::PdfDocument;
use crate::report::{ExtractionReport, UnprocessedEntry, WrittenFile};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the directory, next to the source PDF, that receives the outputs
pub const OUTPUT_DIR_NAME: &str = "tmp";

/// Run an extraction from whatever inputs the user has picked so far.
///
/// Either input may be missing, in which case nothing is read or written.
pub fn extract_selected(
    pdf_path: Option<&Path>,
    csv_path: Option<&Path>,
) -> Result<ExtractionReport, ExtractError> {
    let pdf_path = pdf_path.ok_or(ExtractError::InputSelection(InputKind::Pdf))?;
    let csv_path = csv_path.ok_or(ExtractError::InputSelection(InputKind::Csv))?;
    extract(pdf_path, csv_path)
}

/// Write one PDF per manifest row into `<pdf dir>/tmp/<filename>.pdf`.
///
/// The manifest is parsed completely before the source is opened, so a bad
/// manifest leaves the filesystem untouched. Rows whose start page lies past
/// the last page are reported back rather than written. Any other failure
/// aborts the run.
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    pdf_path: P,
    csv_path: Q,
) -> Result<ExtractionReport, ExtractError> {
    let pdf_path = pdf_path.as_ref();
    let rows = read_manifest(csv_path)?;

    let source = PdfDocument::open(pdf_path)?;
    let total_pages = source.page_count();

    let output_dir = output_dir_for(pdf_path);
    std::fs::create_dir_all(&output_dir).map_err(|source| ExtractError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    let mut unprocessed = Vec::new();

    for row in rows {
        let Some(span) = PageSpan::resolve(row.start_page, row.end_page, total_pages) else {
            warn!(
                filename = %row.filename,
                start_page = row.start_page,
                end_page = row.end_page,
                total_pages,
                "start page exceeds page count, skipping"
            );
            unprocessed.push(UnprocessedEntry {
                filename: row.filename,
                start_page: row.start_page,
                end_page: row.end_page,
            });
            continue;
        };

        let output_path = output_dir.join(format!("{}.pdf", row.filename));
        if span.is_empty() {
            debug!(
                filename = %row.filename,
                start_page = row.start_page,
                end_page = row.end_page,
                "range selects no pages, writing an empty document"
            );
        }
        let mut new_doc = source.extract_span(&span);
        PdfDocument::save(&mut new_doc, &output_path)?;

        info!(
            path = %output_path.display(),
            pages = span.len(),
            "extraction complete"
        );
        written.push(WrittenFile {
            filename: row.filename,
            path: output_path,
            page_count: span.len(),
        });
    }

    Ok(ExtractionReport {
        source: pdf_path.to_path_buf(),
        output_dir,
        total_pages,
        written,
        unprocessed,
    })
}

fn output_dir_for(pdf_path: &Path) -> PathBuf {
    pdf_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_DIR_NAME)
}
