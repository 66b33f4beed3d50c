//! Reading and writing delimited numeric records via the `csv` crate.

use std::path::Path;

use crate::util::{AngleMapError, AngleMapResult};

/// Tab delimiter byte.
pub const TAB: u8 = b'\t';
/// Comma delimiter byte.
pub const COMMA: u8 = b',';

/// Reads a delimited file into numeric records, one `Vec<f64>` per row.
///
/// Rows may have different lengths. A row whose fields are all empty parses
/// to an empty record; the pipeline uses this to detect the degenerate
/// trailing record some recordings end with. Any other non-numeric field is a
/// [`AngleMapError::MalformedRow`].
pub fn read_table(path: &Path, delimiter: u8) -> AngleMapResult<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|_| AngleMapError::InputNotFound {
            path: path.to_path_buf(),
        })?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|err| AngleMapError::MalformedRow {
            path: path.to_path_buf(),
            row,
            reason: err.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            records.push(Vec::new());
            continue;
        }

        let mut fields = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value =
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|err| AngleMapError::MalformedRow {
                        path: path.to_path_buf(),
                        row,
                        reason: format!("{field:?}: {err}"),
                    })?;
            fields.push(value);
        }
        records.push(fields);
    }

    Ok(records)
}

/// Writes numeric records to `path` as a comma-delimited file, one record per
/// line, overwriting any existing file.
pub fn write_table(records: &[Vec<f64>], path: &Path) -> AngleMapResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| AngleMapError::WriteFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    for record in records {
        writer
            .write_record(record.iter().map(|value| value.to_string()))
            .map_err(|err| AngleMapError::WriteFailed {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
    }

    writer.flush().map_err(|err| AngleMapError::WriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{read_table, write_table, COMMA, TAB};
    use crate::util::AngleMapError;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_tab_delimited_rows() {
        let file = write_temp("1.5\t-2\t3\n4\t5\t6.25\n");
        let records = read_table(file.path(), TAB).unwrap();
        assert_eq!(records, vec![vec![1.5, -2.0, 3.0], vec![4.0, 5.0, 6.25]]);
    }

    #[test]
    fn comma_file_read_as_tab_is_malformed() {
        let file = write_temp("1,2,3\n");
        let err = read_table(file.path(), TAB).err().unwrap();
        assert!(matches!(err, AngleMapError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn all_empty_row_becomes_empty_record() {
        let file = write_temp("1,2\n,\n");
        let records = read_table(file.path(), COMMA).unwrap();
        assert_eq!(records, vec![vec![1.0, 2.0], vec![]]);
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.dat");
        let err = read_table(&path, COMMA).err().unwrap();
        assert_eq!(err, AngleMapError::InputNotFound { path });
    }

    #[test]
    fn write_then_read_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![vec![1.0, -90.5, 42.0], vec![0.0, 370.0, -3.25]];
        write_table(&records, &path).unwrap();
        assert_eq!(read_table(&path, COMMA).unwrap(), records);
    }
}
