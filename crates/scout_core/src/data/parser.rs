//! Parser for the whitespace-delimited player export (`all_plrs.txt`).
//!
//! No header row; fields are positional and only the first 13 count:
//! Team, Player, Age, Nat, St, Tk, Ps, Sh, Ag, KAb, TAb, PAb, SAb.
//!
//! Lines with fewer than 13 fields or without a usable Age are dropped and
//! counted. Any other non-numeric value becomes `None`.

use crate::models::PlayerRecord;
use crate::SIGNIFICANT_COLUMNS;
use serde::Serialize;
use tracing::debug;

/// Parsing statistics for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-blank lines seen.
    pub total_rows: u32,
    pub parsed: u32,
    /// Lines dropped for a short field count.
    pub short_rows: u32,
    /// Lines dropped for a missing or unusable Age.
    pub bad_age: u32,
}

impl ParseStats {
    pub fn dropped(&self) -> u32 {
        self.short_rows + self.bad_age
    }
}

/// Lenient numeric coercion: anything that is not a finite number is missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Age must be a finite, non-negative number. Fractions truncate toward zero.
fn parse_age(raw: &str) -> Option<u32> {
    let value = parse_number(raw)?;
    if value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value.trunc() as u32)
}

/// Parse one line. `None` means the line is dropped from the working set.
pub fn parse_line(line: &str) -> Option<PlayerRecord> {
    let fields: Vec<&str> = line.split_whitespace().take(SIGNIFICANT_COLUMNS).collect();
    if fields.len() < SIGNIFICANT_COLUMNS {
        return None;
    }

    let age = parse_age(fields[2])?;

    Some(PlayerRecord {
        team: fields[0].to_string(),
        player: fields[1].to_string(),
        age,
        nat: fields[3].to_string(),
        st: parse_number(fields[4]),
        tk: parse_number(fields[5]),
        ps: parse_number(fields[6]),
        sh: parse_number(fields[7]),
        ag: parse_number(fields[8]),
        kab: parse_number(fields[9]),
        tab: parse_number(fields[10]),
        pab: parse_number(fields[11]),
        sab: parse_number(fields[12]),
    })
}

/// Parse a whole payload into records, in file order.
pub fn parse_records(text: &str) -> (Vec<PlayerRecord>, ParseStats) {
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for (idx, line) in text.lines().enumerate() {
        // BOM on the first line would otherwise glue onto the team code
        let line = line.trim_start_matches('\u{feff}');
        if line.trim().is_empty() {
            continue;
        }
        stats.total_rows += 1;
        let line_no = idx + 1;

        let field_count = line.split_whitespace().count();
        if field_count < SIGNIFICANT_COLUMNS {
            stats.short_rows += 1;
            debug!(line = line_no, fields = field_count, "dropping short row");
            continue;
        }

        match parse_line(line) {
            Some(record) => {
                records.push(record);
                stats.parsed += 1;
            }
            None => {
                stats.bad_age += 1;
                debug!(line = line_no, "dropping row without usable age");
            }
        }
    }

    (records, stats)
}
