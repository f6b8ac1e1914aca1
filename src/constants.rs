//! Static tables and defaults for station log conversion
//!
//! The measurement lookup table and the output column order are compiled
//! into the program and never change at runtime.

// =============================================================================
// Input Format
// =============================================================================

/// Prefix marking a data line; every other line in a log file is ignored
pub const DATA_ROW_PREFIX: &str = "S,";

/// File name suffix of station log files picked up by the directory walk
pub const LOG_FILE_SUFFIX: &str = ".txt";

/// Minimum number of comma-separated fields in a data row: the tag and the
/// seven station/time fields, ending with the year at index 7
pub const MIN_ROW_FIELDS: usize = fields::YEAR + 1;

/// Positional layout of the fixed part of a data row
pub mod fields {
    pub const STATION: usize = 1;
    pub const HOUR: usize = 2;
    pub const MINUTE: usize = 3;
    pub const SECOND: usize = 4;
    pub const DAY: usize = 5;
    pub const MONTH: usize = 6;
    pub const YEAR: usize = 7;

    /// Index of the first (measurement ID, processing ID, value) triple
    pub const FIRST_MEASUREMENT: usize = 8;

    /// Width of a measurement triple
    pub const MEASUREMENT_STRIDE: usize = 3;
}

/// Value literal the loggers write when a sensor reported nothing
pub const MISSING_VALUE_MARKER: &str = "*";

/// Format of assembled record timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// Measurement Lookup
// =============================================================================

/// Measurement ID -> (processing ID -> output column name)
pub const MEASUREMENT_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "1",
        &[
            ("2", "Temperature_Avg"),
            ("3", "Temperature_Min"),
            ("4", "Temperature_Max"),
        ],
    ),
    (
        "2",
        &[
            ("2", "Humidity_Avg"),
            ("3", "Humidity_Min"),
            ("4", "Humidity_Max"),
        ],
    ),
    (
        "9",
        &[
            ("2", "Windspeed_Avg"),
            ("3", "Windspeed_Min"),
            ("4", "Windspeed_Max"),
        ],
    ),
    (
        "4",
        &[
            ("2", "Wind Direction_Avg"),
            ("3", "Wind Direction_Min"),
            ("4", "Wind Direction_Max"),
        ],
    ),
    (
        "13",
        &[
            ("2", "Pressure_Avg"),
            ("3", "Pressure_Min"),
            ("4", "Pressure_Max"),
        ],
    ),
    ("10", &[("7", "Rainfall_Acc")]),
    ("51", &[("2", "Soiltemperature10_Avg")]),
    ("101", &[("2", "Soiltemperature20_Avg")]),
    ("151", &[("2", "Soiltemperature50_Avg")]),
    ("201", &[("2", "Soiltemperature100_Avg")]),
];

/// Resolve a (measurement ID, processing ID) pair to its output column name
pub fn measurement_name(measurement_id: &str, processing_id: &str) -> Option<&'static str> {
    MEASUREMENT_TABLE
        .iter()
        .find(|(id, _)| *id == measurement_id)
        .and_then(|(_, processing)| {
            processing
                .iter()
                .find(|(id, _)| *id == processing_id)
                .map(|(_, name)| *name)
        })
}

// =============================================================================
// Output Layout
// =============================================================================

/// Leading CSV columns that come from the fixed part of each row
pub const STATION_COLUMN: &str = "station_id";
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Measurement columns written to the output, in order
pub const REQUIRED_MEASUREMENTS: &[&str] = &[
    "Temperature_Avg",
    "Humidity_Avg",
    "Windspeed_Avg",
    "Wind Direction_Avg",
    "Pressure_Avg",
    "Rainfall_Acc",
    "Windspeed_Max",
    "Soiltemperature10_Avg",
    "Soiltemperature20_Avg",
    "Soiltemperature50_Avg",
    "Soiltemperature100_Avg",
];

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default recency window in days
pub const DEFAULT_DAYS: i64 = 14;
