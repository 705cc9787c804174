use super::units::FORM_FEED;
use crate::config::{FormFeedNumbering, PagingMode};
use log::debug;

/// Tracks which page the unit just read belongs to.
#[derive(Debug, Clone)]
pub struct PageCounter {
    mode: PagingMode,
    page: u64,
    lines_in_page: u64,
    units_seen: u64,
    // Previous unit ended on a form feed.
    after_break: bool,
}

impl PageCounter {
    pub fn new(mode: PagingMode) -> Self {
        PageCounter {
            mode,
            page: 1,
            lines_in_page: 0,
            units_seen: 0,
            after_break: false,
        }
    }

    /// Account for one unit and return the page number it is checked against.
    pub fn observe(&mut self, unit: &[u8]) -> u64 {
        self.units_seen += 1;
        match self.mode {
            PagingMode::Lines { page_length } => {
                self.lines_in_page += 1;
                if self.lines_in_page > page_length {
                    self.advance();
                    self.lines_in_page = 1;
                }
            }
            PagingMode::FormFeed {
                numbering: FormFeedNumbering::Corrected,
            } => {
                if self.after_break {
                    self.advance();
                }
            }
            PagingMode::FormFeed {
                numbering: FormFeedNumbering::Legacy,
            } => self.advance(),
        }
        self.after_break = unit.last() == Some(&FORM_FEED);
        self.page
    }

    /// Close out the stream and return the final page count used for range checks.
    pub fn finish(&mut self) -> u64 {
        // Legacy numbering also counts the read that hits end of stream, unless
        // the last unit was an unterminated tail that already consumed it.
        if let PagingMode::FormFeed {
            numbering: FormFeedNumbering::Legacy,
        } = self.mode
        {
            if self.units_seen == 0 || self.after_break {
                self.advance();
            }
        }
        self.page
    }

    fn advance(&mut self) {
        self.page += 1;
        debug!("page {} begins", self.page);
    }
}
