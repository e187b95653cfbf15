use crate::core::models::atom::AtomRecord;
use crate::core::models::frame::Frame;
use nalgebra::Point3;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Conversion factor applied at the ingestion boundary when the upstream
/// converter emitted Ångström coordinates. Everything downstream of the
/// reader works in Bohr.
pub const ANGSTROM_TO_BOHR: f64 = 1.0 / 0.529177;

/// Length unit of the incoming coordinate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthUnit {
    #[default]
    Bohr,
    Angstrom,
}

impl LengthUnit {
    fn to_bohr(self) -> f64 {
        match self {
            LengthUnit::Bohr => 1.0,
            LengthUnit::Angstrom => ANGSTROM_TO_BOHR,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bohr" => Ok(LengthUnit::Bohr),
            "angstrom" | "ångström" | "aa" => Ok(LengthUnit::Angstrom),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TableParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum TableParseErrorKind {
    #[error("Expected 8 whitespace-separated columns, found {found}")]
    WrongColumnCount { found: usize },
    #[error("Invalid integer in column '{column}' (value: '{value}')")]
    InvalidInt {
        column: &'static str,
        value: String,
    },
    #[error("Invalid float in column '{column}' (value: '{value}')")]
    InvalidFloat {
        column: &'static str,
        value: String,
    },
}

const COLUMN_COUNT: usize = 8;

/// The in-memory coordinate table: every atom record of the run, plus the
/// timesteps in the order they first appear.
///
/// The whole table is loaded before any computation begins; a malformed
/// data line aborts the read, since a schema violation poisons the entire
/// run. The expected layout is one ignored header line followed by
/// whitespace-delimited rows `resid resname atomname serial timestep x y z`.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    records: Vec<AtomRecord>,
    timesteps: Vec<i64>,
}

impl CoordinateTable {
    pub fn read_from(reader: &mut impl BufRead, unit: LengthUnit) -> Result<Self, TableError> {
        let scale = unit.to_bohr();
        let mut table = CoordinateTable::default();
        let mut seen_timesteps = HashSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            // Line 1 is the header; it is ignored wholesale.
            if line_num == 1 || line.trim().is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() != COLUMN_COUNT {
                return Err(TableError::Parse {
                    line: line_num,
                    kind: TableParseErrorKind::WrongColumnCount {
                        found: columns.len(),
                    },
                });
            }

            let record = AtomRecord {
                resid: parse_int(columns[0], "resid", line_num)?,
                resname: columns[1].to_string(),
                atomname: columns[2].to_string(),
                serial: parse_int(columns[3], "atom", line_num)?,
                timestep: parse_int(columns[4], "timestep", line_num)?,
                position: Point3::new(
                    parse_float(columns[5], "x", line_num)? * scale,
                    parse_float(columns[6], "y", line_num)? * scale,
                    parse_float(columns[7], "z", line_num)? * scale,
                ),
            };

            if seen_timesteps.insert(record.timestep) {
                table.timesteps.push(record.timestep);
            }
            table.records.push(record);
        }

        Ok(table)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P, unit: LengthUnit) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, unit)
    }

    pub fn records(&self) -> &[AtomRecord] {
        &self.records
    }

    /// Timesteps in the order they first appear in the table.
    pub fn timesteps(&self) -> &[i64] {
        &self.timesteps
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Partitions the table into indexed frames, one per timestep, in
    /// first-appearance order.
    pub fn into_frames(self, solvent_resnames: &[String]) -> Vec<Frame> {
        let mut by_timestep: HashMap<i64, Vec<AtomRecord>> = HashMap::new();
        for record in self.records {
            by_timestep.entry(record.timestep).or_default().push(record);
        }

        self.timesteps
            .iter()
            .map(|&ts| Frame::build(ts, by_timestep.remove(&ts).unwrap_or_default(), solvent_resnames))
            .collect()
    }
}

fn parse_int(value: &str, column: &'static str, line: usize) -> Result<i64, TableError> {
    value.parse().map_err(|_| TableError::Parse {
        line,
        kind: TableParseErrorKind::InvalidInt {
            column,
            value: value.to_string(),
        },
    })
}

fn parse_float(value: &str, column: &'static str, line: usize) -> Result<f64, TableError> {
    value.parse().map_err(|_| TableError::Parse {
        line,
        kind: TableParseErrorKind::InvalidFloat {
            column,
            value: value.to_string(),
        },
    })
}
