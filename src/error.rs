use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// A rejected combination of command-line parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NonPositivePage,
    StartAfterEnd { start: i64, end: i64 },
    ConflictingPaging { page_length: i64 },
    PageLengthTooSmall { page_length: i64 },
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositivePage => {
                write!(f, "page numbers can't be negative")
            }
            ValidationError::StartAfterEnd { start, end } => {
                write!(f, "startPage ({}) can't be bigger than endPage ({})", start, end)
            }
            ValidationError::ConflictingPaging { page_length } => write!(
                f,
                "-l and -f are conflicting (page length {} given with form-feed paging)",
                page_length
            ),
            ValidationError::PageLengthTooSmall { page_length } => {
                write!(f, "pageLength ({}) can't be less than 1", page_length)
            }
        }
    }
}

#[derive(Debug)]
pub enum SelpgError {
    Validation(ValidationError),
    InputNotFound { path: PathBuf },
    Io { op: &'static str, source: io::Error },
    Spawn { program: String, source: io::Error },
    SpoolerFailed { program: String, status: ExitStatus },
    StartPageBeyondEnd { start: u64, total: u64 },
    EndPageBeyondEnd { end: u64, total: u64 },
}

impl SelpgError {
    pub fn io(op: &'static str, source: io::Error) -> Self {
        SelpgError::Io { op, source }
    }

    /// Process exit code for this class of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SelpgError::Validation(_) => 2,
            SelpgError::InputNotFound { .. }
            | SelpgError::Io { .. }
            | SelpgError::Spawn { .. }
            | SelpgError::SpoolerFailed { .. } => 1,
            SelpgError::StartPageBeyondEnd { .. } | SelpgError::EndPageBeyondEnd { .. } => 3,
        }
    }
}

impl std::error::Error for SelpgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelpgError::Validation(e) => Some(e),
            SelpgError::Io { source, .. } | SelpgError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for SelpgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelpgError::Validation(e) => write!(f, "{}", e),
            SelpgError::InputNotFound { path } => {
                write!(f, "input file \"{}\" does not exist", path.display())
            }
            SelpgError::Io { op, source } => write!(f, "{}: {}", op, source),
            SelpgError::Spawn { program, source } => {
                write!(f, "failed to start `{}`: {}", program, source)
            }
            SelpgError::SpoolerFailed { program, status } => {
                write!(f, "`{}` exited with {}", program, status)
            }
            SelpgError::StartPageBeyondEnd { start, total } => write!(
                f,
                "startPage ({}) greater than total pages ({}), no output written",
                start, total
            ),
            SelpgError::EndPageBeyondEnd { end, total } => write!(
                f,
                "endPage ({}) greater than total pages ({}), less output than expected",
                end, total
            ),
        }
    }
}

impl From<ValidationError> for SelpgError {
    fn from(err: ValidationError) -> Self {
        SelpgError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_class() {
        assert_eq!(SelpgError::from(ValidationError::NonPositivePage).exit_code(), 2);
        let missing = SelpgError::InputNotFound {
            path: PathBuf::from("nope.txt"),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(SelpgError::StartPageBeyondEnd { start: 5, total: 3 }.exit_code(), 3);
        assert_eq!(SelpgError::EndPageBeyondEnd { end: 5, total: 3 }.exit_code(), 3);
    }

    #[test]
    fn test_range_messages() {
        let msg = SelpgError::StartPageBeyondEnd { start: 5, total: 3 }.to_string();
        assert_eq!(msg, "startPage (5) greater than total pages (3), no output written");
        let msg = SelpgError::EndPageBeyondEnd { end: 5, total: 3 }.to_string();
        assert!(msg.starts_with("endPage (5) greater than total pages (3)"));
    }
}
