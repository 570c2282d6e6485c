//! Station file reader and deduplication.

use crate::error::{ParseError, Result};
use crate::record::{StationRecord, Variable};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Column positions of the schema fields within a record line.
///
/// The source format carries additional columns (report metadata, remarks)
/// that the analysis does not use; the schema columns sit at these fixed
/// positions.
const COL_STID: usize = 1;
const COL_LAT: usize = 2;
const COL_LON: usize = 3;
const COL_SLP: usize = 4;
const COL_TEMPERATURE: usize = 5;
const COL_CLOUD_FRACTION: usize = 6;
const COL_DEWPOINT: usize = 7;
const COL_WEATHER: usize = 17;
const COL_WIND_DIR: usize = 18;
const COL_WIND_SPEED: usize = 19;

/// Minimum number of comma-separated columns a record line must have.
const MIN_COLUMNS: usize = 20;

/// Read and parse a station observation file.
///
/// The first line is a header and is skipped. Each following line is split
/// on commas and the schema columns are extracted by position. Empty
/// numeric fields parse as NaN (missing observation); any other
/// unparseable numeric field is an error carrying the 1-based line number.
pub fn read_station_file<P: AsRef<Path>>(path: P) -> Result<Vec<StationRecord>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines();

    // Header row
    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(ParseError::EmptyFile),
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        // Line 1 is the header, so data starts at line 2
        let line_no = idx + 2;

        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_record(&line, line_no)?);
    }

    debug!(path = %path.as_ref().display(), records = records.len(), "Parsed station file");
    Ok(records)
}

/// Parse a single record line.
fn parse_record(line: &str, line_no: usize) -> Result<StationRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_COLUMNS {
        return Err(ParseError::ShortLine {
            line: line_no,
            expected: MIN_COLUMNS,
            found: fields.len(),
        });
    }

    Ok(StationRecord {
        stid: fields[COL_STID].trim().to_string(),
        latitude: parse_number(fields[COL_LAT], line_no, COL_LAT)?,
        longitude: parse_number(fields[COL_LON], line_no, COL_LON)?,
        sea_level_pressure: parse_number(fields[COL_SLP], line_no, COL_SLP)?,
        air_temperature: parse_number(fields[COL_TEMPERATURE], line_no, COL_TEMPERATURE)?,
        cloud_fraction: parse_number(fields[COL_CLOUD_FRACTION], line_no, COL_CLOUD_FRACTION)?,
        dewpoint: parse_number(fields[COL_DEWPOINT], line_no, COL_DEWPOINT)?,
        weather: fields[COL_WEATHER].trim().to_string(),
        wind_dir: parse_number(fields[COL_WIND_DIR], line_no, COL_WIND_DIR)?,
        wind_speed: parse_number(fields[COL_WIND_SPEED], line_no, COL_WIND_SPEED)?,
    })
}

/// Parse a numeric field. Empty fields and literal "nan" are missing data.
fn parse_number(field: &str, line_no: usize, column: usize) -> Result<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }

    trimmed.parse().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        column,
        value: trimmed.to_string(),
    })
}

/// Keep the first record per station id, in first-seen file order.
pub fn dedup_by_station(records: Vec<StationRecord>) -> Vec<StationRecord> {
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let deduped: Vec<StationRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.stid.clone()))
        .collect();

    debug!(total, unique = deduped.len(), "Deduplicated stations");
    deduped
}

/// Extract parallel (lon, lat, value) arrays for the requested variable.
pub fn extract(records: &[StationRecord], variable: Variable) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let lons = records.iter().map(|r| r.longitude).collect();
    let lats = records.iter().map(|r| r.latitude).collect();
    let values = records.iter().map(|r| variable.value(r)).collect();
    (lons, lats, values)
}
