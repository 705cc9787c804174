use crate::error::ValidationError;

/// An inclusive, 1-based range of pages to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

impl PageRange {
    /// Build a range from raw command-line values, rejecting zero or negative
    /// page numbers and reversed bounds.
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if start <= 0 || end <= 0 {
            return Err(ValidationError::NonPositivePage);
        }
        if start > end {
            return Err(ValidationError::StartAfterEnd { start, end });
        }

        Ok(PageRange {
            start: start as u64,
            end: end as u64,
        })
    }

    pub fn contains(&self, page: u64) -> bool {
        page >= self.start && page <= self.end
    }
}
