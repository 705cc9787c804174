use super::counter::PageCounter;
use super::sink::OutputSink;
use super::units::{TextUnits, FORM_FEED, NEWLINE};
use crate::config::PagingMode;
use crate::error::SelpgError;
use crate::page_range::PageRange;
use log::debug;
use std::io::BufRead;

/// Totals gathered while streaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamReport {
    /// Final page counter value, compared against the requested range.
    pub last_page: u64,
    pub units_read: u64,
    pub units_written: u64,
    pub bytes_written: u64,
}

/// Copy every unit whose page falls inside `range` from `input` to `sink`, one
/// unit at a time. The sink is not finished here.
pub fn stream<R: BufRead, S: OutputSink + ?Sized>(
    range: PageRange,
    mode: PagingMode,
    input: R,
    sink: &mut S,
) -> Result<StreamReport, SelpgError> {
    let delimiter = match mode {
        PagingMode::Lines { .. } => NEWLINE,
        PagingMode::FormFeed { .. } => FORM_FEED,
    };
    let mut units = TextUnits::new(input, delimiter);
    let mut counter = PageCounter::new(mode);
    let mut report = StreamReport::default();

    while let Some(unit) = units
        .next_unit()
        .map_err(|e| SelpgError::io("read input", e))?
    {
        report.units_read += 1;
        let page = counter.observe(unit);
        if range.contains(page) {
            sink.write_unit(unit)?;
            report.units_written += 1;
            report.bytes_written += unit.len() as u64;
        }
    }

    report.last_page = counter.finish();
    debug!("stream exhausted: {:?}", report);
    Ok(report)
}

/// Compare the final page count against the requested range.
pub fn check_range(range: PageRange, report: &StreamReport) -> Result<(), SelpgError> {
    if report.last_page < range.start {
        Err(SelpgError::StartPageBeyondEnd {
            start: range.start,
            total: report.last_page,
        })
    } else if report.last_page < range.end {
        Err(SelpgError::EndPageBeyondEnd {
            end: range.end,
            total: report.last_page,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormFeedNumbering;
    use crate::paging::sink::StreamSink;
    use std::io::{self, Cursor, Read};

    fn numbered_lines(n: usize) -> String {
        (1..=n).map(|i| format!("line {}\n", i)).collect()
    }

    fn run(start: i64, end: i64, mode: PagingMode, input: &str) -> (String, StreamReport) {
        let range = PageRange::new(start, end).unwrap();
        let mut sink = StreamSink::new(Vec::new());
        let report = stream(range, mode, Cursor::new(input.as_bytes()), &mut sink).unwrap();
        sink.finish().unwrap();
        (String::from_utf8(sink.into_inner()).unwrap(), report)
    }

    fn lines(page_length: u64) -> PagingMode {
        PagingMode::Lines { page_length }
    }

    #[test]
    fn test_selects_middle_pages() {
        let (out, report) = run(2, 3, lines(10), &numbered_lines(40));
        let expected: String = (11..=30).map(|i| format!("line {}\n", i)).collect();
        assert_eq!(out, expected);
        assert_eq!(report.last_page, 4);
        assert_eq!(report.units_read, 40);
        assert_eq!(report.units_written, 20);
        assert!(check_range(PageRange::new(2, 3).unwrap(), &report).is_ok());
    }

    #[test]
    fn test_boundary_lines_not_dropped_or_duplicated() {
        let input = numbered_lines(9);
        let (first, _) = run(1, 1, lines(3), &input);
        let (second, _) = run(2, 2, lines(3), &input);
        let (third, _) = run(3, 3, lines(3), &input);
        assert_eq!(format!("{}{}{}", first, second, third), input);
        assert_eq!(second, "line 4\nline 5\nline 6\n");
    }

    #[test]
    fn test_unterminated_last_line_is_kept() {
        let (out, _) = run(2, 2, lines(1), "a\nb");
        assert_eq!(out, "b");
    }

    #[test]
    fn test_end_page_beyond_input() {
        let range = PageRange::new(1, 5).unwrap();
        let (out, report) = run(1, 5, lines(10), &numbered_lines(25));
        assert_eq!(out, numbered_lines(25));
        assert_eq!(report.last_page, 3);
        assert!(matches!(
            check_range(range, &report),
            Err(SelpgError::EndPageBeyondEnd { end: 5, total: 3 })
        ));
    }

    #[test]
    fn test_start_page_beyond_input() {
        let range = PageRange::new(5, 6).unwrap();
        let (out, report) = run(5, 6, lines(10), &numbered_lines(25));
        assert!(out.is_empty());
        assert_eq!(report.units_written, 0);
        assert!(matches!(
            check_range(range, &report),
            Err(SelpgError::StartPageBeyondEnd { start: 5, total: 3 })
        ));
    }

    #[test]
    fn test_form_feed_pages() {
        let mode = PagingMode::FormFeed {
            numbering: FormFeedNumbering::Corrected,
        };
        let input = "one\n\x0Ctwo\n\x0Cthree\n";
        let (out, report) = run(2, 3, mode, input);
        assert_eq!(out, "two\n\x0Cthree\n");
        assert_eq!(report.last_page, 3);

        let (out, _) = run(1, 1, mode, input);
        assert_eq!(out, "one\n\x0C");
    }

    #[test]
    fn test_form_feed_legacy_pages() {
        let mode = PagingMode::FormFeed {
            numbering: FormFeedNumbering::Legacy,
        };
        let input = "one\n\x0Ctwo\n\x0Cthree\n";
        // The first chunk is numbered 2.
        let (out, _) = run(1, 1, mode, input);
        assert!(out.is_empty());
        let (out, report) = run(2, 2, mode, input);
        assert_eq!(out, "one\n\x0C");
        assert_eq!(report.last_page, 4);
    }

    #[test]
    fn test_same_input_same_output() {
        let input = numbered_lines(30);
        assert_eq!(run(2, 4, lines(7), &input).0, run(2, 4, lines(7), &input).0);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_is_fatal() {
        let range = PageRange::new(1, 1).unwrap();
        let mut sink = StreamSink::new(Vec::new());
        let err = stream(range, lines(72), io::BufReader::new(FailingReader), &mut sink)
            .unwrap_err();
        assert!(matches!(err, SelpgError::Io { op: "read input", .. }));
    }
}
