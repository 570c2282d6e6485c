//! Station record schema.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A single surface station observation.
///
/// Parsed once from the input file and immutable afterwards. Missing
/// numeric observations are represented as NaN and filtered later in the
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Three-character station identifier
    pub stid: String,
    /// Latitude in degrees north
    pub latitude: f64,
    /// Longitude in degrees east
    pub longitude: f64,
    /// Sea-level pressure (hPa)
    pub sea_level_pressure: f64,
    /// Air temperature (degrees C)
    pub air_temperature: f64,
    /// Cloud fraction (0-1)
    pub cloud_fraction: f64,
    /// Dewpoint temperature (degrees C)
    pub dewpoint: f64,
    /// Present-weather code (up to 16 characters)
    pub weather: String,
    /// Wind direction (degrees from north)
    pub wind_dir: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
}

/// Scalar observation variables that can be selected for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    SeaLevelPressure,
    AirTemperature,
    CloudFraction,
    Dewpoint,
    WindDir,
    WindSpeed,
}

impl Variable {
    /// Read this variable's value from a record.
    pub fn value(&self, record: &StationRecord) -> f64 {
        match self {
            Variable::SeaLevelPressure => record.sea_level_pressure,
            Variable::AirTemperature => record.air_temperature,
            Variable::CloudFraction => record.cloud_fraction,
            Variable::Dewpoint => record.dewpoint,
            Variable::WindDir => record.wind_dir,
            Variable::WindSpeed => record.wind_speed,
        }
    }

    /// Display units for this variable.
    pub fn units(&self) -> &'static str {
        match self {
            Variable::SeaLevelPressure => "hPa",
            Variable::AirTemperature | Variable::Dewpoint => "degC",
            Variable::CloudFraction => "",
            Variable::WindDir => "deg",
            Variable::WindSpeed => "m/s",
        }
    }
}

impl FromStr for Variable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slp" | "sea_level_pressure" => Ok(Variable::SeaLevelPressure),
            "air_temperature" | "temperature" => Ok(Variable::AirTemperature),
            "cloud_fraction" => Ok(Variable::CloudFraction),
            "dewpoint" => Ok(Variable::Dewpoint),
            "wind_dir" => Ok(Variable::WindDir),
            "wind_speed" => Ok(Variable::WindSpeed),
            other => Err(ParseError::UnknownVariable(other.to_string())),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variable::SeaLevelPressure => "sea_level_pressure",
            Variable::AirTemperature => "air_temperature",
            Variable::CloudFraction => "cloud_fraction",
            Variable::Dewpoint => "dewpoint",
            Variable::WindDir => "wind_dir",
            Variable::WindSpeed => "wind_speed",
        };
        f.write_str(name)
    }
}
