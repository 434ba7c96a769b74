//! Error handling for section synchronization
//!
//! This module provides a unified error type and result type for all
//! sync operations. Errors are local to one section: the orchestrator
//! reports them and moves on to the next requested section.

use std::fmt;

/// Sync error type
#[derive(Debug, Clone)]
pub enum SyncError {
    /// The LaTeX source file for a section is missing
    SourceMissing { path: String },
    /// One or both sentinel markers are absent from the target document
    BoundaryMissing {
        section: String,
        start_present: bool,
        end_present: bool,
    },
    /// The parser produced no records for a section
    NoRecords { section: String },
    /// A section name with no entry in the configuration table
    UnknownSection { name: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::SourceMissing { path } => {
                write!(f, "LaTeX file {} not found", path)
            }
            SyncError::BoundaryMissing {
                section,
                start_present,
                end_present,
            } => {
                write!(f, "Could not find {} comment boundaries", section)?;
                if !start_present {
                    write!(f, " (start marker missing)")?;
                }
                if !end_present {
                    write!(f, " (end marker missing)")?;
                }
                Ok(())
            }
            SyncError::NoRecords { section } => {
                write!(f, "No {} entries found in LaTeX file", section)
            }
            SyncError::UnknownSection { name } => {
                write!(f, "Unknown section: {}", name)
            }
            SyncError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for SyncError {}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

// Convenience constructors for errors
impl SyncError {
    pub fn source_missing(path: impl Into<String>) -> Self {
        SyncError::SourceMissing { path: path.into() }
    }

    pub fn boundary_missing(
        section: impl Into<String>,
        start_present: bool,
        end_present: bool,
    ) -> Self {
        SyncError::BoundaryMissing {
            section: section.into(),
            start_present,
            end_present,
        }
    }

    pub fn no_records(section: impl Into<String>) -> Self {
        SyncError::NoRecords {
            section: section.into(),
        }
    }

    pub fn unknown_section(name: impl Into<String>) -> Self {
        SyncError::UnknownSection { name: name.into() }
    }
}
