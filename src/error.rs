use std::path::PathBuf;
use thiserror::Error;

/// Which of the two inputs an extraction run was started without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pdf,
    Csv,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Pdf => f.write_str("PDF"),
            InputKind::Csv => f.write_str("CSV"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No {0} file selected")]
    InputSelection(InputKind),

    #[error("Failed to read manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    #[error("Failed to open PDF {}: {source}", path.display())]
    SourceDocument {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize PDF for {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    #[error("Failed to write PDF {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: {column} `{value}` is not an integer")]
    NotAnInteger {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: expected 3 fields, found {found}")]
    TooManyFields { line: u64, found: usize },
}
