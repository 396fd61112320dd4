//! JSON-lines dataset IO

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use bangla_cleaner_core::Row;

/// Read one JSON object per non-blank line
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON", path.display(), idx + 1))?;
        match value {
            Value::Object(row) => rows.push(row),
            _ => bail!("{}:{}: expected a JSON object", path.display(), idx + 1),
        }
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "Read dataset");
    Ok(rows)
}

/// Write rows as JSON lines
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        std::fs::write(
            &input,
            "{\"text\": \"ভালো\", \"label\": 1}\n\n{\"text\": null}\n",
        )
        .unwrap();

        let rows = read_rows(&input).unwrap();
        assert_eq!(rows.len(), 2);

        let output = dir.path().join("out.jsonl");
        write_rows(&output, &rows).unwrap();
        assert_eq!(read_rows(&output).unwrap(), rows);
    }

    #[test]
    fn test_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        std::fs::write(&input, "[1, 2]\n").unwrap();
        let err = read_rows(&input).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }
}
