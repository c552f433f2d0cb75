use crate::config::MapSpec;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Column letters of a map grid.
pub const ALPHABET: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Highest difficulty rating a colour can map to.
pub const MAX_DIFFICULTY: u8 = 6;

/// Builds the label of the cell at the given 0-based grid position ("B-3" is
/// column 1, row 2).
///
/// Will be `None` if the column is past the end of the alphabet.
#[inline]
pub fn cell_label(row: usize, column: usize) -> Option<String> {
    ALPHABET.chars()
            .nth(column)
            .map(|letter| format!("{}-{}", letter, row + 1))
}

/// How hard a cell's mission is, read from the cell's highlight colour.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Difficulty {
    /// 0 (easiest) through `MAX_DIFFICULTY`.
    Rated(u8),

    /// The colour was missing or not one we know.
    Invalid
}

impl Difficulty {
    /// Suffix of the `difficulty-*` CSS class.
    pub fn class_suffix(&self) -> String {
        match self {
            Difficulty::Rated(n) => n.to_string(),
            Difficulty::Invalid => "invalid".into()
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.class_suffix())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
        match self {
            Difficulty::Rated(n) => serializer.serialize_u8(*n),
            Difficulty::Invalid => serializer.serialize_str("invalid")
        }
    }
}

/// Grid dimensions.
#[derive(Debug, Default, PartialEq, Copy, Clone, Serialize)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CellRecord {
    pub difficulty: Difficulty,

    /// Recognized mission header -> normalized HTML fragment.
    pub mission_data: BTreeMap<String, String>
}

/// Everything extracted from one map page.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct MapRecord {
    pub size: GridSize,

    /// Keyed by cell label ("A-2").
    pub cells: BTreeMap<String, CellRecord>
}

/// A map and its extracted record, in the order they get rendered.
#[derive(Debug, PartialEq, Clone)]
pub struct ExtractedMap {
    pub spec: MapSpec,
    pub record: MapRecord
}

/// A recoverable irregularity found while extracting a page.
#[derive(Debug, PartialEq, Clone)]
pub enum Warning {
    /// A grid cell had no usable background colour.
    InvalidColor {
        cell: String,
        color: Option<String>
    },

    /// A mission table ended with a header row that had no value row.
    OddRowCount {
        heading: String,
        rows: usize
    },

    /// A header row and its value row had a different number of cells.
    MismatchedRow {
        heading: String,
        row: usize,
        headers: usize,
        values: usize
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::InvalidColor { cell, color: Some(color) } =>
                write!(f, "Invalid color \"{}\" for cell_loc {}", color, cell),
            Warning::InvalidColor { cell, color: None } =>
                write!(f, "No color for cell_loc {}", cell),
            Warning::OddRowCount { heading, rows } =>
                write!(f, "Mission table \"{}\" has an odd number of rows ({})", heading, rows),
            Warning::MismatchedRow { heading, row, headers, values } =>
                write!(f, "Mission table \"{}\" has mismatched headers and values at row {} \
                           ({} headers, {} values)", heading, row + 1, headers, values)
        }
    }
}

/// A `MapRecord` plus whatever was skipped along the way.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Extraction {
    pub record: MapRecord,
    pub warnings: Vec<Warning>
}
