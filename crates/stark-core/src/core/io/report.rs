use crate::core::models::result::FieldResult;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Shape of the emitted result table.
///
/// `Long` writes one row per (timestep, probe) with the full field vector;
/// `Wide` writes one row per timestep with one projection column per probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportForm {
    #[default]
    Long,
    Wide,
}

impl FromStr for ReportForm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" => Ok(ReportForm::Long),
            "wide" => Ok(ReportForm::Wide),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// Shortest-round-trip float formatting keeps reruns byte-identical;
/// undefined values serialize as the `NaN` sentinel.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", value)
    }
}

/// Writes the long-form table: `timestep atom field_x field_y field_z
/// projection`, tab-separated, one header line.
pub fn write_long(results: &[FieldResult], writer: &mut impl Write) -> Result<(), ReportError> {
    let mut tsv = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record([
        "timestep",
        "atom",
        "field_x",
        "field_y",
        "field_z",
        "projection",
    ])?;

    for row in results {
        tsv.write_record([
            row.timestep.to_string(),
            row.atom.clone(),
            format_value(row.field.x),
            format_value(row.field.y),
            format_value(row.field.z),
            format_value(row.projection),
        ])?;
    }
    tsv.flush()?;
    Ok(())
}

/// Writes the wide-form table: one row per timestep, one projection column
/// per probe in `probes` order. Probes absent from a timestep appear as
/// `NaN`, so every timestep of the input is covered by exactly one row.
pub fn write_wide(
    results: &[FieldResult],
    probes: &[String],
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    let mut tsv = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    let mut header = Vec::with_capacity(probes.len() + 1);
    header.push("timestep".to_string());
    header.extend(probes.iter().cloned());
    tsv.write_record(&header)?;

    let mut timesteps = Vec::new();
    let mut projections: HashMap<(i64, &str), f64> = HashMap::new();
    for row in results {
        if !timesteps.contains(&row.timestep) {
            timesteps.push(row.timestep);
        }
        projections.insert((row.timestep, row.atom.as_str()), row.projection);
    }

    for timestep in timesteps {
        let mut record = Vec::with_capacity(probes.len() + 1);
        record.push(timestep.to_string());
        for probe in probes {
            let value = projections
                .get(&(timestep, probe.as_str()))
                .copied()
                .unwrap_or(f64::NAN);
            record.push(format_value(value));
        }
        tsv.write_record(&record)?;
    }
    tsv.flush()?;
    Ok(())
}

/// Writes `results` to `path` in the requested form.
pub fn write_to_path<P: AsRef<Path>>(
    results: &[FieldResult],
    probes: &[String],
    form: ReportForm,
    path: P,
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match form {
        ReportForm::Long => write_long(results, &mut writer),
        ReportForm::Wide => write_wide(results, probes, &mut writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn row(timestep: i64, atom: &str, field: Vector3<f64>, projection: f64) -> FieldResult {
        FieldResult {
            timestep,
            atom: atom.to_string(),
            field,
            projection,
        }
    }

    fn probes() -> Vec<String> {
        vec!["NE".to_string(), "NH1".to_string(), "NH2".to_string()]
    }

    #[test]
    fn long_form_writes_header_and_tab_separated_rows() {
        let results = vec![row(0, "NE", Vector3::new(0.5, -0.25, 0.0), 0.125)];
        let mut buffer = Vec::new();
        write_long(&results, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("timestep\tatom\tfield_x\tfield_y\tfield_z\tprojection")
        );
        assert_eq!(lines.next(), Some("0\tNE\t0.5\t-0.25\t0\t0.125"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn undefined_projection_serializes_as_nan_sentinel() {
        let results = vec![row(3, "NH1", Vector3::zeros(), f64::NAN)];
        let mut buffer = Vec::new();
        write_long(&results, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("\tNaN"));
    }

    #[test]
    fn wide_form_emits_one_row_per_timestep_with_probe_columns() {
        let results = vec![
            row(0, "NE", Vector3::zeros(), 0.1),
            row(0, "NH1", Vector3::zeros(), 0.2),
            row(0, "NH2", Vector3::zeros(), 0.3),
            row(1, "NE", Vector3::zeros(), -0.5),
            row(1, "NH1", Vector3::zeros(), f64::NAN),
            row(1, "NH2", Vector3::zeros(), 0.25),
        ];
        let mut buffer = Vec::new();
        write_wide(&results, &probes(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "timestep\tNE\tNH1\tNH2");
        assert_eq!(lines[1], "0\t0.1\t0.2\t0.3");
        assert_eq!(lines[2], "1\t-0.5\tNaN\t0.25");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn wide_form_fills_missing_probe_rows_with_nan() {
        // Timestep 1 has no NH2 row at all (probe absent from the frame).
        let results = vec![
            row(1, "NE", Vector3::zeros(), 0.5),
            row(1, "NH1", Vector3::zeros(), 0.5),
        ];
        let mut buffer = Vec::new();
        write_wide(&results, &probes(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().nth(1), Some("1\t0.5\t0.5\tNaN"));
    }

    #[test]
    fn writing_twice_produces_identical_bytes() {
        let results = vec![
            row(0, "NE", Vector3::new(1.0 / 3.0, 0.0, 2.5e-7), 0.1),
            row(1, "NE", Vector3::zeros(), f64::NAN),
        ];
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_long(&results, &mut first).unwrap();
        write_long(&results, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_form_parses_from_str() {
        assert_eq!(ReportForm::from_str("long"), Ok(ReportForm::Long));
        assert_eq!(ReportForm::from_str("WIDE"), Ok(ReportForm::Wide));
        assert_eq!(ReportForm::from_str("tall"), Err(()));
    }
}
