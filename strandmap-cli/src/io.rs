//! Line-oriented sequence input and segment record output.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use strandmap_core::Segment;

use crate::error::{CliError, CliResult};

/// Read the first line of `path` as raw sequence bytes, stripping trailing
/// line terminators. An unopenable file maps to [`CliError::MissingInput`].
pub fn read_sequence_line(path: &Path) -> CliResult<Vec<u8>> {
    let file = File::open(path).map_err(|source| CliError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line.into_bytes())
}

/// Write one `(queryStart,queryEnd,refStart,refEnd),` record per line, in
/// the order given (backtrace emission order, goal to origin).
pub fn write_segments(path: &Path, segments: &[Segment]) -> CliResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for segment in segments {
        writeln!(writer, "{},", segment)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use strandmap_core::Strand;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_reads_first_line_only() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "ACGT\nTTTT\n").unwrap();
        assert_eq!(read_sequence_line(file.path()).unwrap(), b"ACGT");
    }

    #[test]
    fn test_strips_carriage_returns() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "ACGT\r\n").unwrap();
        assert_eq!(read_sequence_line(file.path()).unwrap(), b"ACGT");
    }

    #[test]
    fn test_empty_file_yields_empty_sequence() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(read_sequence_line(file.path()).unwrap(), b"");
    }

    #[test]
    fn test_missing_file_reports_its_path() {
        let err = read_sequence_line(Path::new("no_such_input.txt")).unwrap_err();
        assert!(matches!(err, CliError::MissingInput { .. }));
        assert!(err.to_string().contains("no_such_input.txt"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_records_keep_order_and_trailing_comma() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let segments = vec![
            Segment {
                query_start: 6,
                query_end: 11,
                ref_start: 0,
                ref_end: 5,
                strand: Strand::Reverse,
            },
            Segment {
                query_start: 0,
                query_end: 6,
                ref_start: 0,
                ref_end: 6,
                strand: Strand::Forward,
            },
        ];

        write_segments(&path, &segments).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "(6,11,0,5),\n(0,6,0,6),\n");
    }

    #[test]
    fn test_no_segments_writes_an_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_segments(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
