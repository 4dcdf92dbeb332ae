use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outcome of a completed extraction run
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub total_pages: u32,
    pub written: Vec<WrittenFile>,
    pub unprocessed: Vec<UnprocessedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub filename: String,
    pub path: PathBuf,
    pub page_count: u32,
}

/// A manifest row whose start page lies past the end of the source document.
/// Keeps the row's original 1-based range for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnprocessedEntry {
    pub filename: String,
    pub start_page: i64,
    pub end_page: i64,
}

impl fmt::Display for UnprocessedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (start page exceeds page count: {}-{})",
            self.filename, self.start_page, self.end_page
        )
    }
}

impl ExtractionReport {
    /// True when every manifest row produced an output file
    pub fn is_complete(&self) -> bool {
        self.unprocessed.is_empty()
    }

    /// The notice shown to the user once the run has finished
    pub fn notice(&self) -> String {
        if self.is_complete() {
            return "All extraction conditions were satisfied.".to_string();
        }

        let mut notice = String::from("The following extractions could not be performed:");
        for entry in &self.unprocessed {
            notice.push('\n');
            notice.push_str(&entry.to_string());
        }
        notice
    }
}
