pub mod error;
pub mod models;
pub mod parser;
pub mod roster;
pub mod shared_roster;

use std::io::{BufRead, BufReader, Read, Write};

use error::{Result, RosterError};
use parser::FIELD_DELIMITER;
use roster::Roster;

pub use parser::parse_employee_line;

/// What to do when a line fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Log the rejected line and keep going
    #[default]
    SkipInvalid,
    /// Abort on the first rejected line
    Strict,
}

/// Read one employee per line into a roster
///
/// Line indices are zero-based and count blank lines, which are skipped.
/// A line that is not valid UTF-8 is treated like any other rejected line;
/// only I/O failures on the reader abort a `SkipInvalid` load.
pub fn load_roster<R: Read>(reader: R, mode: ImportMode) -> Result<Roster> {
    let mut roster = Roster::new();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    for index in 0.. {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            if mode == ImportMode::Strict {
                return Err(RosterError::Encoding { line_index: index });
            }
            tracing::warn!(line_index = index, "Skipping employee line that is not valid UTF-8");
            continue;
        };
        // Tolerate CRLF input
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        match roster.add_line(line, index) {
            Ok(()) => {}
            Err(err) if mode == ImportMode::SkipInvalid => {
                tracing::warn!(line_index = err.line_index, reason = %err.kind, "Skipping invalid employee line");
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!(employees = roster.len(), "Roster loaded");
    Ok(roster)
}

/// Write employees back in the `;`-delimited line format
pub fn write_roster<W: Write>(roster: &Roster, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    for employee in roster.employees() {
        csv_writer.serialize(employee)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Load employees from a reader and write the accepted ones to a writer
pub fn process_roster<R: Read, W: Write>(reader: R, writer: W, mode: ImportMode) -> Result<()> {
    let roster = load_roster(reader, mode)?;
    write_roster(&roster, writer)
}
