use crate::error::ExtractError;
use crate::extractor::extract_selected;
use crate::report::ExtractionReport;
use std::path::Path;
use std::process::ExitCode;

/// Exit status when some rows were skipped but nothing failed
const EXIT_UNPROCESSED: u8 = 2;

pub fn run(pdf_path: Option<&Path>, csv_path: Option<&Path>) -> ExitCode {
    render(extract_selected(pdf_path, csv_path))
}

fn render(outcome: Result<ExtractionReport, ExtractError>) -> ExitCode {
    match outcome {
        Ok(report) => {
            println!("{}", report.notice());
            if report.is_complete() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_UNPROCESSED)
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
